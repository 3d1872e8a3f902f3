use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::aggregate_id::validate_raw_id;
use crate::domain::common::AggregateId;
use crate::enums::badge_variant::BadgeVariant;
use crate::shared::labels::name_or;

/// Идентификатор подписки в биллинге
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(pub String);

impl AggregateId for SubscriptionId {
    fn as_str(&self) -> &str {
        &self.0
    }

    fn from_string(s: &str) -> Result<Self, String> {
        validate_raw_id(s).map(SubscriptionId)
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Статус подписки. Неизвестные значения сохраняются как есть.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubscriptionStatus {
    Trial,
    Active,
    Suspended,
    Cancelled,
    Other(String),
}

impl SubscriptionStatus {
    pub fn code(&self) -> &str {
        match self {
            SubscriptionStatus::Trial => "Trial",
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Suspended => "Suspended",
            SubscriptionStatus::Cancelled => "Cancelled",
            SubscriptionStatus::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "Trial" => SubscriptionStatus::Trial,
            "Active" => SubscriptionStatus::Active,
            "Suspended" => SubscriptionStatus::Suspended,
            "Cancelled" => SubscriptionStatus::Cancelled,
            other => SubscriptionStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for SubscriptionStatus {
    fn from(code: String) -> Self {
        SubscriptionStatus::from_code(&code)
    }
}

impl From<SubscriptionStatus> for String {
    fn from(status: SubscriptionStatus) -> Self {
        status.code().to_string()
    }
}

/// Подписка (частичное представление записи биллинга)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: SubscriptionId,
    pub name: String,
    pub account_name: Option<String>,
    pub price_plan_name: Option<String>,
    pub status: Option<SubscriptionStatus>,
    pub trial_end_date: Option<NaiveDate>,
    pub cancellation_reason: Option<String>,
}

impl Subscription {
    /// Вариант бейджа статуса
    pub fn status_variant(&self) -> BadgeVariant {
        match self.status {
            Some(SubscriptionStatus::Active) => BadgeVariant::Success,
            Some(SubscriptionStatus::Trial) => BadgeVariant::Warning,
            Some(SubscriptionStatus::Cancelled) => BadgeVariant::Error,
            _ => BadgeVariant::Inverse,
        }
    }

    pub fn show_trial_fields(&self) -> bool {
        matches!(self.status, Some(SubscriptionStatus::Trial))
    }

    pub fn show_cancellation_fields(&self) -> bool {
        matches!(
            self.status,
            Some(SubscriptionStatus::Cancelled) | Some(SubscriptionStatus::Suspended)
        )
    }

    pub fn account_display_name(&self) -> String {
        name_or(self.account_name.as_deref(), "Not set")
    }

    pub fn price_plan_display_name(&self) -> String {
        name_or(self.price_plan_name.as_deref(), "Not set")
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a002_subscription::aggregate::{Subscription, SubscriptionId};
use crate::domain::common::AggregateId;
use crate::enums::badge_variant::BadgeVariant;
use crate::shared::labels::{name_or, pluralize};
use crate::shared::urgency::{
    classify_dates, sort_by_urgency, SeverityTier, UrgencyMode, UrgencyRanked,
};

/// Горизонт виджета по умолчанию, дней
pub const DEFAULT_DAYS_AHEAD: u32 = 7;

/// Параметры запроса виджета
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpiringTrialsRequest {
    pub days_ahead: Option<u32>,
}

/// Строка виджета истекающих пробных подписок
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiringTrialRow {
    pub subscription_id: SubscriptionId,
    pub name: String,
    pub account_name: String,
    pub price_plan_name: String,
    pub trial_end_date: Option<NaiveDate>,
    pub days_remaining: i64,
    pub urgency_label: String,
    pub severity_tier: SeverityTier,
    pub badge_variant: BadgeVariant,
}

impl ExpiringTrialRow {
    pub fn from_subscription(subscription: &Subscription, today: NaiveDate) -> Self {
        let classification = classify_dates(
            today,
            subscription.trial_end_date,
            UrgencyMode::ExpiringSoon,
        );
        Self {
            subscription_id: subscription.id.clone(),
            name: subscription.name.clone(),
            account_name: name_or(subscription.account_name.as_deref(), "N/A"),
            price_plan_name: name_or(subscription.price_plan_name.as_deref(), "N/A"),
            trial_end_date: subscription.trial_end_date,
            days_remaining: classification.day_offset,
            badge_variant: classification
                .severity_tier
                .badge_variant(UrgencyMode::ExpiringSoon),
            severity_tier: classification.severity_tier,
            urgency_label: classification.label,
        }
    }
}

impl UrgencyRanked for ExpiringTrialRow {
    fn record_id(&self) -> &str {
        self.subscription_id.as_str()
    }

    fn day_offset(&self) -> i64 {
        self.days_remaining
    }
}

/// Виджет пробных подписок, истекающих в ближайшие `days_ahead` дней
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiringTrialsWidget {
    pub as_of: NaiveDate,
    pub days_ahead: u32,
    /// "Trials Expiring in N Days"
    pub title: String,
    pub rows: Vec<ExpiringTrialRow>,
    pub expiring_count: usize,
    /// "Trial" or "Trials"
    pub trial_count_label: String,
    pub has_expiring: bool,
}

impl ExpiringTrialsWidget {
    pub fn build(subscriptions: &[Subscription], today: NaiveDate, days_ahead: u32) -> Self {
        let mut rows: Vec<ExpiringTrialRow> = subscriptions
            .iter()
            .map(|s| ExpiringTrialRow::from_subscription(s, today))
            .collect();
        sort_by_urgency(&mut rows, UrgencyMode::ExpiringSoon);

        let mut widget = Self {
            as_of: today,
            days_ahead,
            title: format!("Trials Expiring in {} Days", days_ahead),
            rows,
            expiring_count: 0,
            trial_count_label: String::new(),
            has_expiring: false,
        };
        widget.recount();
        widget
    }

    /// Drop a converted subscription from the rows. Returns whether it was present.
    pub fn remove(&mut self, id: &SubscriptionId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| &r.subscription_id != id);
        self.recount();
        self.rows.len() != before
    }

    fn recount(&mut self) {
        self.expiring_count = self.rows.len();
        self.trial_count_label =
            pluralize(self.expiring_count as i64, "Trial", "Trials").to_string();
        self.has_expiring = self.expiring_count > 0;
    }
}

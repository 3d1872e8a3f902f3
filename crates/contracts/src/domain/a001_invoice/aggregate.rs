use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::aggregate_id::validate_raw_id;
use crate::domain::common::AggregateId;
use crate::enums::badge_variant::BadgeVariant;
use crate::shared::labels::name_or;

/// Срок оплаты нового счёта, дней
pub const DEFAULT_PAYMENT_DAYS: i64 = 30;
/// Ставка налога нового счёта, %
pub const DEFAULT_TAX_RATE: f64 = 22.0;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор счёта в биллинге
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub String);

impl AggregateId for InvoiceId {
    fn as_str(&self) -> &str {
        &self.0
    }

    fn from_string(s: &str) -> Result<Self, String> {
        validate_raw_id(s).map(InvoiceId)
    }
}

impl std::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Status / payment terms
// ============================================================================

/// Статус счёта. Неизвестные значения сохраняются как есть.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Voided,
    Other(String),
}

impl InvoiceStatus {
    pub fn code(&self) -> &str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Sent => "Sent",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Voided => "Voided",
            InvoiceStatus::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "Draft" => InvoiceStatus::Draft,
            "Sent" => InvoiceStatus::Sent,
            "Paid" => InvoiceStatus::Paid,
            "Overdue" => InvoiceStatus::Overdue,
            "Voided" => InvoiceStatus::Voided,
            other => InvoiceStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(code: String) -> Self {
        InvoiceStatus::from_code(&code)
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> Self {
        status.code().to_string()
    }
}

/// Условия оплаты
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentTerms {
    Net30,
    Net60,
    DueOnReceipt,
    Other(String),
}

impl PaymentTerms {
    pub fn code(&self) -> &str {
        match self {
            PaymentTerms::Net30 => "Net_30",
            PaymentTerms::Net60 => "Net_60",
            PaymentTerms::DueOnReceipt => "Due_on_Receipt",
            PaymentTerms::Other(code) => code,
        }
    }

    /// Человекочитаемое название
    pub fn label(&self) -> &str {
        match self {
            PaymentTerms::Net30 => "Net 30",
            PaymentTerms::Net60 => "Net 60",
            PaymentTerms::DueOnReceipt => "Due on Receipt",
            PaymentTerms::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "Net_30" => PaymentTerms::Net30,
            "Net_60" => PaymentTerms::Net60,
            "Due_on_Receipt" => PaymentTerms::DueOnReceipt,
            other => PaymentTerms::Other(other.to_string()),
        }
    }
}

impl From<String> for PaymentTerms {
    fn from(code: String) -> Self {
        PaymentTerms::from_code(&code)
    }
}

impl From<PaymentTerms> for String {
    fn from(terms: PaymentTerms) -> Self {
        terms.code().to_string()
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Счёт (частичное представление записи биллинга)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub number: String,
    pub account_id: Option<String>,
    pub account_name: Option<String>,
    pub status: Option<InvoiceStatus>,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub total_amount: Option<f64>,
    pub reminders_sent: Option<u32>,
    pub payment_terms: Option<PaymentTerms>,
    pub tax_rate: Option<f64>,
}

impl Invoice {
    /// Вариант бейджа статуса
    pub fn status_variant(&self) -> BadgeVariant {
        match self.status {
            Some(InvoiceStatus::Paid) => BadgeVariant::Success,
            Some(InvoiceStatus::Sent) => BadgeVariant::Warning,
            Some(InvoiceStatus::Overdue) | Some(InvoiceStatus::Voided) => BadgeVariant::Error,
            _ => BadgeVariant::Inverse,
        }
    }

    /// Оплаченный или аннулированный счёт редактировать нельзя
    pub fn can_edit(&self) -> bool {
        !matches!(
            self.status,
            Some(InvoiceStatus::Paid) | Some(InvoiceStatus::Voided)
        )
    }

    pub fn account_display_name(&self) -> String {
        name_or(self.account_name.as_deref(), "Not set")
    }

    pub fn payment_terms_label(&self) -> String {
        match &self.payment_terms {
            Some(terms) if !terms.code().is_empty() => terms.label().to_string(),
            _ => "Not set".to_string(),
        }
    }
}

/// Черновик нового счёта со значениями по умолчанию
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub account_id: String,
    pub status: InvoiceStatus,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub tax_rate: f64,
}

impl InvoiceDraft {
    /// Создать черновик для клиента: дата счёта сегодня, оплата через 30 дней
    pub fn for_account(account_id: &str, today: NaiveDate) -> Result<Self, String> {
        let account_id = validate_raw_id(account_id)
            .map_err(|_| "Клиент (account_id) не задан".to_string())?;
        Ok(Self {
            account_id,
            status: InvoiceStatus::Draft,
            invoice_date: today,
            due_date: today + chrono::Duration::days(DEFAULT_PAYMENT_DAYS),
            tax_rate: DEFAULT_TAX_RATE,
        })
    }
}

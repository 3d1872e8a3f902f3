use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_invoice::aggregate::{Invoice, InvoiceId};
use crate::domain::common::AggregateId;
use crate::enums::badge_variant::BadgeVariant;
use crate::shared::labels::{name_or, pluralize};
use crate::shared::urgency::{
    classify_dates, overdue_label, sort_by_urgency, SeverityTier, UrgencyMode, UrgencyRanked,
};

/// Сообщение после отправки напоминания с дашборда
pub const REMINDER_SENT_MESSAGE: &str = "Reminder sent successfully";

/// Строка дашборда просроченных счетов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdueInvoiceRow {
    pub invoice_id: InvoiceId,
    pub number: String,
    /// "N/A" when the invoice has no account
    pub account_name: String,
    pub due_date: Option<NaiveDate>,
    pub days_overdue: i64,
    /// Always rendered, "0 days overdue" included
    pub overdue_label: String,
    pub severity_tier: SeverityTier,
    pub badge_variant: BadgeVariant,
    pub total_amount: f64,
    pub reminders_sent: u32,
    pub has_reminders: bool,
    /// e.g. "2 reminders sent", absent when none were sent
    pub reminder_badge: Option<String>,
}

impl OverdueInvoiceRow {
    pub fn from_invoice(invoice: &Invoice, today: NaiveDate) -> Self {
        let classification = classify_dates(today, invoice.due_date, UrgencyMode::Overdue);
        let reminders_sent = invoice.reminders_sent.unwrap_or(0);
        let has_reminders = reminders_sent > 0;
        let reminder_badge = has_reminders.then(|| {
            format!(
                "{} {} sent",
                reminders_sent,
                pluralize(i64::from(reminders_sent), "reminder", "reminders")
            )
        });

        Self {
            invoice_id: invoice.id.clone(),
            number: invoice.number.clone(),
            account_name: name_or(invoice.account_name.as_deref(), "N/A"),
            due_date: invoice.due_date,
            days_overdue: classification.day_offset,
            overdue_label: overdue_label(classification.day_offset),
            severity_tier: classification.severity_tier,
            badge_variant: classification
                .severity_tier
                .badge_variant(UrgencyMode::Overdue),
            total_amount: invoice.total_amount.unwrap_or(0.0),
            reminders_sent,
            has_reminders,
            reminder_badge,
        }
    }
}

impl UrgencyRanked for OverdueInvoiceRow {
    fn record_id(&self) -> &str {
        self.invoice_id.as_str()
    }

    fn day_offset(&self) -> i64 {
        self.days_overdue
    }
}

/// Дашборд просроченных счетов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdueInvoicesDashboard {
    /// Day the rows were classified against, "YYYY-MM-DD"
    pub as_of: NaiveDate,
    pub rows: Vec<OverdueInvoiceRow>,
    pub overdue_count: usize,
    pub total_overdue_amount: f64,
    /// "Invoice" or "Invoices"
    pub invoice_count_label: String,
    pub has_overdue_invoices: bool,
}

impl OverdueInvoicesDashboard {
    /// Build the dashboard from the invoices returned by the billing tier
    pub fn build(invoices: &[Invoice], today: NaiveDate) -> Self {
        let mut rows: Vec<OverdueInvoiceRow> = invoices
            .iter()
            .map(|inv| OverdueInvoiceRow::from_invoice(inv, today))
            .collect();
        sort_by_urgency(&mut rows, UrgencyMode::Overdue);

        let overdue_count = rows.len();
        let total_overdue_amount = rows.iter().map(|r| r.total_amount).sum();

        Self {
            as_of: today,
            rows,
            overdue_count,
            total_overdue_amount,
            invoice_count_label: pluralize(overdue_count as i64, "Invoice", "Invoices").to_string(),
            has_overdue_invoices: overdue_count > 0,
        }
    }
}

//! Record shapes as the billing tier serializes them

use chrono::NaiveDate;
use contracts::domain::a001_invoice::aggregate::{
    Invoice, InvoiceId, InvoiceStatus, PaymentTerms,
};
use contracts::domain::a002_subscription::aggregate::{
    Subscription, SubscriptionId, SubscriptionStatus,
};
use contracts::shared::date_utils::parse_calendar_date;
use serde::Deserialize;

/// Related record reference, e.g. `Account__r`
#[derive(Debug, Clone, Deserialize)]
pub struct RelatedName {
    #[serde(rename = "Name")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteInvoice {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Account__c")]
    pub account_id: Option<String>,
    #[serde(rename = "Account__r")]
    pub account: Option<RelatedName>,
    #[serde(rename = "Status__c")]
    pub status: Option<String>,
    #[serde(rename = "Invoice_Date__c")]
    pub invoice_date: Option<String>,
    #[serde(rename = "Due_Date__c")]
    pub due_date: Option<String>,
    #[serde(rename = "Total_Amount__c")]
    pub total_amount: Option<f64>,
    #[serde(rename = "Reminders_Sent__c")]
    pub reminders_sent: Option<f64>,
    #[serde(rename = "Payment_Terms__c")]
    pub payment_terms: Option<String>,
    #[serde(rename = "Tax_Rate__c")]
    pub tax_rate: Option<f64>,
}

impl RemoteInvoice {
    pub fn into_invoice(self) -> Invoice {
        let invoice_date = date_field(&self.id, "Invoice_Date__c", self.invoice_date.as_deref());
        let due_date = date_field(&self.id, "Due_Date__c", self.due_date.as_deref());
        Invoice {
            number: self.name.unwrap_or_default(),
            account_id: self.account_id,
            account_name: self.account.and_then(|a| a.name),
            status: self.status.as_deref().map(InvoiceStatus::from_code),
            invoice_date,
            due_date,
            total_amount: self.total_amount,
            reminders_sent: self.reminders_sent.map(|n| n.max(0.0) as u32),
            payment_terms: self.payment_terms.as_deref().map(PaymentTerms::from_code),
            tax_rate: self.tax_rate,
            id: InvoiceId(self.id),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteSubscription {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Account__r")]
    pub account: Option<RelatedName>,
    #[serde(rename = "Price_Plan__r")]
    pub price_plan: Option<RelatedName>,
    #[serde(rename = "Status__c")]
    pub status: Option<String>,
    #[serde(rename = "Trial_End_Date__c")]
    pub trial_end_date: Option<String>,
    #[serde(rename = "Cancellation_Reason__c")]
    pub cancellation_reason: Option<String>,
}

impl RemoteSubscription {
    pub fn into_subscription(self) -> Subscription {
        let trial_end_date =
            date_field(&self.id, "Trial_End_Date__c", self.trial_end_date.as_deref());
        Subscription {
            name: self.name.unwrap_or_default(),
            account_name: self.account.and_then(|a| a.name),
            price_plan_name: self.price_plan.and_then(|p| p.name),
            status: self.status.as_deref().map(SubscriptionStatus::from_code),
            trial_end_date,
            cancellation_reason: self.cancellation_reason,
            id: SubscriptionId(self.id),
        }
    }
}

/// Unreadable dates degrade to "no date" so a single bad record never breaks a list
fn date_field(record_id: &str, field: &str, value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?;
    let parsed = parse_calendar_date(raw);
    if parsed.is_none() {
        tracing::warn!("Record {}: cannot parse {} = '{}'", record_id, field, raw);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invoice_mapping() {
        let raw = json!({
            "Id": "a015g00000ABC",
            "Name": "INV-0042",
            "Account__r": {"Name": "Rossi Srl"},
            "Status__c": "Overdue",
            "Due_Date__c": "2025-01-01",
            "Total_Amount__c": 1220.0,
            "Reminders_Sent__c": 2,
            "Payment_Terms__c": "Net_30"
        });
        let invoice = serde_json::from_value::<RemoteInvoice>(raw).unwrap().into_invoice();

        assert_eq!(invoice.id, InvoiceId("a015g00000ABC".into()));
        assert_eq!(invoice.number, "INV-0042");
        assert_eq!(invoice.account_name.as_deref(), Some("Rossi Srl"));
        assert_eq!(invoice.status, Some(InvoiceStatus::Overdue));
        assert_eq!(invoice.due_date, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(invoice.reminders_sent, Some(2));
        assert_eq!(invoice.payment_terms, Some(PaymentTerms::Net30));
        assert_eq!(invoice.invoice_date, None);
    }

    #[test]
    fn test_bad_date_becomes_none() {
        let raw = json!({"Id": "a01", "Due_Date__c": "not a date"});
        let invoice = serde_json::from_value::<RemoteInvoice>(raw).unwrap().into_invoice();
        assert_eq!(invoice.due_date, None);
        assert_eq!(invoice.number, "");
    }

    #[test]
    fn test_subscription_mapping() {
        let raw = json!({
            "Id": "a025g00000XYZ",
            "Name": "SUB-0007",
            "Price_Plan__r": {"Name": "Pro"},
            "Status__c": "Trial",
            "Trial_End_Date__c": "2025-06-12"
        });
        let sub = serde_json::from_value::<RemoteSubscription>(raw)
            .unwrap()
            .into_subscription();
        assert_eq!(sub.price_plan_name.as_deref(), Some("Pro"));
        assert_eq!(sub.account_name, None);
        assert_eq!(sub.status, Some(SubscriptionStatus::Trial));
        assert_eq!(sub.trial_end_date, NaiveDate::from_ymd_opt(2025, 6, 12));
    }
}

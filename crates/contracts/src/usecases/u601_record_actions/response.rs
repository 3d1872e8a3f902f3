use serde::{Deserialize, Serialize};

use super::availability::{invoice_actions, subscription_actions, ActionState, QuickAction};
use crate::domain::a001_invoice::aggregate::Invoice;
use crate::domain::a002_subscription::aggregate::Subscription;
use crate::enums::badge_variant::BadgeVariant;

/// Карточка счёта: запись + производные значения + кнопки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCard {
    pub invoice: Invoice,
    pub status_variant: BadgeVariant,
    pub can_edit: bool,
    pub account_name: String,
    pub payment_terms_label: String,
    pub actions: Vec<ActionState>,
}

impl InvoiceCard {
    pub fn new(invoice: Invoice) -> Self {
        Self {
            status_variant: invoice.status_variant(),
            can_edit: invoice.can_edit(),
            account_name: invoice.account_display_name(),
            payment_terms_label: invoice.payment_terms_label(),
            actions: invoice_actions(invoice.status.as_ref(), &[]),
            invoice,
        }
    }
}

/// Карточка подписки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionCard {
    pub subscription: Subscription,
    pub status_variant: BadgeVariant,
    pub account_name: String,
    pub price_plan_name: String,
    pub show_trial_fields: bool,
    pub show_cancellation_fields: bool,
    pub actions: Vec<ActionState>,
}

impl SubscriptionCard {
    pub fn new(subscription: Subscription) -> Self {
        Self {
            status_variant: subscription.status_variant(),
            account_name: subscription.account_display_name(),
            price_plan_name: subscription.price_plan_display_name(),
            show_trial_fields: subscription.show_trial_fields(),
            show_cancellation_fields: subscription.show_cancellation_fields(),
            actions: subscription_actions(subscription.status.as_ref(), &[]),
            subscription,
        }
    }
}

/// Результат выполненного действия вместе с обновлённой записью
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome<T> {
    pub action: QuickAction,
    pub title: String,
    pub message: String,
    pub record: T,
}

impl<T> ActionOutcome<T> {
    pub fn success(action: QuickAction, record: T) -> Self {
        Self::success_with(action, action.success_message(), record)
    }

    /// Success with a message of the calling screen, e.g. a dashboard that
    /// words the same remote action differently
    pub fn success_with(action: QuickAction, message: &str, record: T) -> Self {
        Self {
            action,
            title: "Success".into(),
            message: message.into(),
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_invoice::aggregate::{InvoiceId, InvoiceStatus};

    #[test]
    fn test_invoice_card() {
        let invoice = Invoice {
            id: InvoiceId("a01".into()),
            number: "INV-0001".into(),
            account_id: Some("001".into()),
            account_name: None,
            status: Some(InvoiceStatus::Paid),
            invoice_date: None,
            due_date: None,
            total_amount: Some(100.0),
            reminders_sent: None,
            payment_terms: None,
            tax_rate: Some(22.0),
        };
        let card = InvoiceCard::new(invoice);
        assert_eq!(card.status_variant, BadgeVariant::Success);
        assert!(!card.can_edit);
        assert_eq!(card.account_name, "Not set");
        assert!(card.actions.iter().all(|a| a.disabled));

        let outcome = ActionOutcome::success(QuickAction::MarkAsPaid, card);
        assert_eq!(outcome.message, "Invoice marked as paid");
        assert_eq!(outcome.title, "Success");
    }
}

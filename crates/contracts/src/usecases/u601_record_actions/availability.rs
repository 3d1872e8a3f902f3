use serde::{Deserialize, Serialize};

use crate::domain::a001_invoice::aggregate::InvoiceStatus;
use crate::domain::a002_subscription::aggregate::SubscriptionStatus;
use crate::enums::record_kind::RecordKind;
use crate::shared::remote_error::ErrorPayload;

/// Быстрое действие над записью
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    SendInvoice,
    MarkAsPaid,
    Activate,
    Cancel,
}

/// Диалог подтверждения перед действием
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub label: String,
    pub message: String,
    pub theme: String,
}

impl QuickAction {
    pub fn record_kind(&self) -> RecordKind {
        match self {
            QuickAction::SendInvoice | QuickAction::MarkAsPaid => RecordKind::Invoice,
            QuickAction::Activate | QuickAction::Cancel => RecordKind::Subscription,
        }
    }

    /// Действия, доступные на странице записи данного типа
    pub fn for_kind(kind: RecordKind) -> &'static [QuickAction] {
        match kind {
            RecordKind::Invoice => &[QuickAction::SendInvoice, QuickAction::MarkAsPaid],
            RecordKind::Subscription => &[QuickAction::Activate, QuickAction::Cancel],
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            QuickAction::SendInvoice => "Invoice sent successfully",
            QuickAction::MarkAsPaid => "Invoice marked as paid",
            QuickAction::Activate => "Subscription activated successfully",
            QuickAction::Cancel => "Subscription cancelled successfully",
        }
    }

    pub fn failure_title(&self) -> &'static str {
        match self {
            QuickAction::SendInvoice => "Failed to send invoice",
            QuickAction::MarkAsPaid => "Failed to mark invoice as paid",
            QuickAction::Activate => "Failed to activate subscription",
            QuickAction::Cancel => "Failed to cancel subscription",
        }
    }

    /// Cancel collects a reason instead of a yes/no confirmation
    pub fn confirmation(&self) -> Option<Confirmation> {
        match self {
            QuickAction::MarkAsPaid => Some(Confirmation {
                label: "Confirm Payment".into(),
                message: "Are you sure you want to mark this invoice as paid? \
                          This will set the balance to zero."
                    .into(),
                theme: "success".into(),
            }),
            QuickAction::Activate => Some(Confirmation {
                label: "Confirm Activation".into(),
                message: "Are you sure you want to activate this subscription?".into(),
                theme: "success".into(),
            }),
            QuickAction::SendInvoice | QuickAction::Cancel => None,
        }
    }
}

/// Состояние кнопки действия
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionState {
    pub action: QuickAction,
    pub disabled: bool,
    pub in_progress: bool,
    /// Tooltip, only mark-as-paid carries one
    pub title: Option<String>,
    pub confirmation: Option<Confirmation>,
}

fn invoice_action_blocked(action: QuickAction, status: Option<&InvoiceStatus>) -> bool {
    match action {
        QuickAction::SendInvoice => matches!(
            status,
            Some(InvoiceStatus::Paid) | Some(InvoiceStatus::Sent) | Some(InvoiceStatus::Voided)
        ),
        QuickAction::MarkAsPaid => matches!(
            status,
            Some(InvoiceStatus::Paid) | Some(InvoiceStatus::Voided) | Some(InvoiceStatus::Draft)
        ),
        QuickAction::Activate | QuickAction::Cancel => true,
    }
}

fn subscription_action_blocked(action: QuickAction, status: Option<&SubscriptionStatus>) -> bool {
    match action {
        QuickAction::Activate => matches!(
            status,
            Some(SubscriptionStatus::Active) | Some(SubscriptionStatus::Cancelled)
        ),
        QuickAction::Cancel => matches!(status, Some(SubscriptionStatus::Cancelled)),
        QuickAction::SendInvoice | QuickAction::MarkAsPaid => true,
    }
}

/// Tooltip for the mark-as-paid button
pub fn mark_as_paid_title(status: Option<&InvoiceStatus>) -> &'static str {
    match status {
        Some(InvoiceStatus::Draft) => "To mark invoice as paid, send it first",
        Some(InvoiceStatus::Paid) => "Invoice is already marked as paid",
        Some(InvoiceStatus::Voided) => "Cannot mark a voided invoice as paid",
        _ => "Mark this invoice as paid",
    }
}

/// Состояние кнопок панели для счёта.
///
/// `in_progress` is filled by the renderer that tracks running actions; the
/// backend reports states for an idle panel and passes an empty slice.
pub fn invoice_actions(status: Option<&InvoiceStatus>, in_progress: &[QuickAction]) -> Vec<ActionState> {
    QuickAction::for_kind(RecordKind::Invoice)
        .iter()
        .map(|&action| {
            let running = in_progress.contains(&action);
            ActionState {
                action,
                disabled: running || invoice_action_blocked(action, status),
                in_progress: running,
                title: (action == QuickAction::MarkAsPaid)
                    .then(|| mark_as_paid_title(status).to_string()),
                confirmation: action.confirmation(),
            }
        })
        .collect()
}

/// Состояние кнопок панели для подписки.
///
/// Same `in_progress` contract as [`invoice_actions`].
pub fn subscription_actions(
    status: Option<&SubscriptionStatus>,
    in_progress: &[QuickAction],
) -> Vec<ActionState> {
    QuickAction::for_kind(RecordKind::Subscription)
        .iter()
        .map(|&action| {
            let running = in_progress.contains(&action);
            ActionState {
                action,
                disabled: running || subscription_action_blocked(action, status),
                in_progress: running,
                title: None,
                confirmation: action.confirmation(),
            }
        })
        .collect()
}

/// Check an invoice action against the current status before calling the billing tier
pub fn check_invoice_action(
    action: QuickAction,
    status: Option<&InvoiceStatus>,
) -> Result<(), ErrorPayload> {
    if action == QuickAction::MarkAsPaid && matches!(status, Some(InvoiceStatus::Draft)) {
        return Err(ErrorPayload::new(
            "Cannot mark as paid",
            "Please send the invoice before marking it as paid",
        ));
    }
    if invoice_action_blocked(action, status) {
        return Err(not_available(action, status.map(|s| s.code())));
    }
    Ok(())
}

/// Check a subscription action against the current status
pub fn check_subscription_action(
    action: QuickAction,
    status: Option<&SubscriptionStatus>,
) -> Result<(), ErrorPayload> {
    if subscription_action_blocked(action, status) {
        return Err(not_available(action, status.map(|s| s.code())));
    }
    Ok(())
}

/// A cancellation needs a non-blank reason; returns it trimmed
pub fn validate_cancellation_reason(reason: Option<&str>) -> Result<String, ErrorPayload> {
    match reason.map(str::trim) {
        Some(r) if !r.is_empty() => Ok(r.to_string()),
        _ => Err(ErrorPayload::new(
            "Cancellation reason is required",
            "Please provide a reason for cancellation.",
        )),
    }
}

fn not_available(action: QuickAction, status: Option<&str>) -> ErrorPayload {
    ErrorPayload::new(
        action.failure_title(),
        format!(
            "Action is not available for status {}",
            status.unwrap_or("(none)")
        ),
    )
}

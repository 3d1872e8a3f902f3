use contracts::domain::a001_invoice::aggregate::InvoiceId;
use contracts::domain::a002_subscription::aggregate::SubscriptionId;
use contracts::enums::record_kind::RecordKind;
use contracts::shared::remote_error::{ErrorPayload, UNKNOWN_ACTION_ERROR_MESSAGE};
use contracts::usecases::u601_record_actions::{
    check_invoice_action, check_subscription_action, invoice_actions, subscription_actions,
    validate_cancellation_reason, ActionOutcome, ActionState, InvoiceCard, QuickAction,
    SubscriptionCard,
};
use thiserror::Error;

use crate::shared::remote::{BillingGateway, GatewayError};

/// Ошибки выполнения быстрых действий
#[derive(Debug, Error)]
pub enum RecordActionError {
    /// Invalid input, e.g. a blank cancellation reason
    #[error("{}: {}", .0.title, .0.message)]
    Invalid(ErrorPayload),

    /// Rejected locally, the billing tier was not called
    #[error("{}: {}", .0.title, .0.message)]
    Rejected(ErrorPayload),

    #[error("{title}: {source}")]
    Failed {
        title: &'static str,
        #[source]
        source: GatewayError,
    },
}

impl RecordActionError {
    /// Title and message shown to the user. A remote error without a message
    /// gets the quick-action fallback text.
    pub fn payload(&self) -> ErrorPayload {
        match self {
            RecordActionError::Invalid(payload) | RecordActionError::Rejected(payload) => {
                payload.clone()
            }
            RecordActionError::Failed { title, source } => {
                ErrorPayload::new(*title, source.user_message_or(UNKNOWN_ACTION_ERROR_MESSAGE))
            }
        }
    }

    fn failed(action: QuickAction) -> impl FnOnce(GatewayError) -> Self {
        move |source| RecordActionError::Failed {
            title: action.failure_title(),
            source,
        }
    }
}

/// Карточка счёта с состоянием кнопок
pub async fn load_invoice_card(
    gateway: &dyn BillingGateway,
    id: &InvoiceId,
) -> Result<InvoiceCard, GatewayError> {
    let invoice = gateway.get_invoice(id).await?;
    Ok(InvoiceCard::new(invoice))
}

/// Карточка подписки с состоянием кнопок
pub async fn load_subscription_card(
    gateway: &dyn BillingGateway,
    id: &SubscriptionId,
) -> Result<SubscriptionCard, GatewayError> {
    let subscription = gateway.get_subscription(id).await?;
    Ok(SubscriptionCard::new(subscription))
}

/// Состояние кнопок панели для записи любого типа
pub async fn load_action_states(
    gateway: &dyn BillingGateway,
    kind: RecordKind,
    record_id: &str,
) -> Result<Vec<ActionState>, GatewayError> {
    match kind {
        RecordKind::Invoice => {
            let invoice = gateway.get_invoice(&InvoiceId(record_id.to_string())).await?;
            Ok(invoice_actions(invoice.status.as_ref(), &[]))
        }
        RecordKind::Subscription => {
            let subscription = gateway
                .get_subscription(&SubscriptionId(record_id.to_string()))
                .await?;
            Ok(subscription_actions(subscription.status.as_ref(), &[]))
        }
    }
}

/// Выполнить действие над счётом: проверка статуса, вызов биллинга, перечитывание записи
pub async fn run_invoice_action(
    gateway: &dyn BillingGateway,
    id: &InvoiceId,
    action: QuickAction,
) -> Result<ActionOutcome<InvoiceCard>, RecordActionError> {
    let current = gateway
        .get_invoice(id)
        .await
        .map_err(RecordActionError::failed(action))?;
    check_invoice_action(action, current.status.as_ref()).map_err(|rejection| {
        tracing::warn!("Invoice {}: {:?} rejected: {}", id, action, rejection.message);
        RecordActionError::Rejected(rejection)
    })?;

    let result = match action {
        QuickAction::SendInvoice => gateway.send_invoice(id).await,
        QuickAction::MarkAsPaid => gateway.mark_as_paid(id).await,
        QuickAction::Activate | QuickAction::Cancel => {
            return Err(RecordActionError::Rejected(ErrorPayload::new(
                action.failure_title(),
                "Not an invoice action",
            )))
        }
    };
    result.map_err(|e| {
        tracing::error!("Invoice {}: {:?} failed: {}", id, action, e);
        RecordActionError::failed(action)(e)
    })?;
    tracing::info!("Invoice {}: {:?} done", id, action);

    let refreshed = gateway
        .get_invoice(id)
        .await
        .map_err(RecordActionError::failed(action))?;
    Ok(ActionOutcome::success(action, InvoiceCard::new(refreshed)))
}

/// Выполнить действие над подпиской. Для отмены причина обязательна.
pub async fn run_subscription_action(
    gateway: &dyn BillingGateway,
    id: &SubscriptionId,
    action: QuickAction,
    reason: Option<&str>,
) -> Result<ActionOutcome<SubscriptionCard>, RecordActionError> {
    // Checked before anything goes to the billing tier
    let reason = if action == QuickAction::Cancel {
        Some(validate_cancellation_reason(reason).map_err(RecordActionError::Invalid)?)
    } else {
        None
    };

    let current = gateway
        .get_subscription(id)
        .await
        .map_err(RecordActionError::failed(action))?;
    check_subscription_action(action, current.status.as_ref()).map_err(|rejection| {
        tracing::warn!("Subscription {}: {:?} rejected: {}", id, action, rejection.message);
        RecordActionError::Rejected(rejection)
    })?;

    let result = match (action, reason.as_deref()) {
        (QuickAction::Activate, _) => gateway.activate_subscription(id).await,
        (QuickAction::Cancel, Some(reason)) => gateway.cancel_subscription(id, reason).await,
        _ => {
            return Err(RecordActionError::Rejected(ErrorPayload::new(
                action.failure_title(),
                "Not a subscription action",
            )))
        }
    };
    result.map_err(|e| {
        tracing::error!("Subscription {}: {:?} failed: {}", id, action, e);
        RecordActionError::failed(action)(e)
    })?;
    tracing::info!("Subscription {}: {:?} done", id, action);

    let refreshed = gateway
        .get_subscription(id)
        .await
        .map_err(RecordActionError::failed(action))?;
    Ok(ActionOutcome::success(action, SubscriptionCard::new(refreshed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::remote::fake::FakeGateway;
    use contracts::domain::a001_invoice::aggregate::{Invoice, InvoiceStatus};
    use contracts::domain::a002_subscription::aggregate::{Subscription, SubscriptionStatus};

    fn invoice(status: InvoiceStatus) -> Invoice {
        Invoice {
            id: InvoiceId("inv1".into()),
            number: "INV-0001".into(),
            account_id: Some("001".into()),
            account_name: Some("Esposito".into()),
            status: Some(status),
            invoice_date: None,
            due_date: None,
            total_amount: Some(500.0),
            reminders_sent: None,
            payment_terms: None,
            tax_rate: Some(22.0),
        }
    }

    fn subscription(status: SubscriptionStatus) -> Subscription {
        Subscription {
            id: SubscriptionId("sub1".into()),
            name: "SUB-0001".into(),
            account_name: None,
            price_plan_name: Some("Business".into()),
            status: Some(status),
            trial_end_date: None,
            cancellation_reason: None,
        }
    }

    #[tokio::test]
    async fn test_mark_as_paid_refreshes_record() {
        let gateway = FakeGateway::new(vec![invoice(InvoiceStatus::Sent)], vec![]);
        let outcome = run_invoice_action(&gateway, &InvoiceId("inv1".into()), QuickAction::MarkAsPaid)
            .await
            .unwrap();

        assert_eq!(outcome.message, "Invoice marked as paid");
        assert_eq!(outcome.record.invoice.status, Some(InvoiceStatus::Paid));
        assert!(!outcome.record.can_edit);
        assert_eq!(
            gateway.calls(),
            ["get_invoice:inv1", "mark_as_paid:inv1", "get_invoice:inv1"]
        );
    }

    #[tokio::test]
    async fn test_mark_draft_as_paid_is_rejected_locally() {
        let gateway = FakeGateway::new(vec![invoice(InvoiceStatus::Draft)], vec![]);
        let err = run_invoice_action(&gateway, &InvoiceId("inv1".into()), QuickAction::MarkAsPaid)
            .await
            .unwrap_err();

        match err {
            RecordActionError::Rejected(payload) => {
                assert_eq!(payload.message, "Please send the invoice before marking it as paid")
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(gateway.calls(), ["get_invoice:inv1"]);
    }

    #[tokio::test]
    async fn test_send_invoice_remote_failure() {
        let gateway =
            FakeGateway::new(vec![invoice(InvoiceStatus::Draft)], vec![]).failing("No email on account");
        let err = run_invoice_action(&gateway, &InvoiceId("inv1".into()), QuickAction::SendInvoice)
            .await
            .unwrap_err();

        match err {
            RecordActionError::Failed { title, source } => {
                assert_eq!(title, "Failed to send invoice");
                assert_eq!(source.user_message(), "No email on account");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_remote_failure_without_message_uses_action_fallback() {
        let gateway =
            FakeGateway::new(vec![invoice(InvoiceStatus::Sent)], vec![]).failing_without_message();
        let err = run_invoice_action(&gateway, &InvoiceId("inv1".into()), QuickAction::MarkAsPaid)
            .await
            .unwrap_err();

        let payload = err.payload();
        assert_eq!(payload.title, "Failed to mark invoice as paid");
        assert_eq!(payload.message, UNKNOWN_ACTION_ERROR_MESSAGE);
        assert_eq!(
            gateway.calls(),
            ["get_invoice:inv1", "mark_as_paid:inv1"]
        );
    }

    #[tokio::test]
    async fn test_cancel_requires_reason_before_remote_call() {
        let gateway = FakeGateway::new(vec![], vec![subscription(SubscriptionStatus::Active)]);
        let err = run_subscription_action(
            &gateway,
            &SubscriptionId("sub1".into()),
            QuickAction::Cancel,
            Some("  "),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, RecordActionError::Invalid(_)));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_with_reason() {
        let gateway = FakeGateway::new(vec![], vec![subscription(SubscriptionStatus::Active)]);
        let outcome = run_subscription_action(
            &gateway,
            &SubscriptionId("sub1".into()),
            QuickAction::Cancel,
            Some(" Switched provider "),
        )
        .await
        .unwrap();

        assert_eq!(outcome.message, "Subscription cancelled successfully");
        assert!(outcome.record.show_cancellation_fields);
        assert_eq!(
            outcome.record.subscription.cancellation_reason.as_deref(),
            Some("Switched provider")
        );
        assert!(gateway
            .calls()
            .contains(&"cancel_subscription:sub1:Switched provider".to_string()));
    }

    #[tokio::test]
    async fn test_activate_active_subscription_is_rejected() {
        let gateway = FakeGateway::new(vec![], vec![subscription(SubscriptionStatus::Active)]);
        let err = run_subscription_action(
            &gateway,
            &SubscriptionId("sub1".into()),
            QuickAction::Activate,
            None,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RecordActionError::Rejected(_)));
    }

    #[tokio::test]
    async fn test_invoice_action_on_subscription_endpoint_is_rejected() {
        let gateway = FakeGateway::new(vec![], vec![subscription(SubscriptionStatus::Trial)]);
        let err = run_subscription_action(
            &gateway,
            &SubscriptionId("sub1".into()),
            QuickAction::SendInvoice,
            None,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RecordActionError::Rejected(_)));
    }

    #[tokio::test]
    async fn test_load_action_states() {
        let gateway = FakeGateway::new(vec![invoice(InvoiceStatus::Paid)], vec![]);
        let states = load_action_states(&gateway, RecordKind::Invoice, "inv1").await.unwrap();
        assert_eq!(states.len(), 2);
        assert!(states.iter().all(|s| s.disabled));
    }
}

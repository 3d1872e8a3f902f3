use chrono::NaiveDate;
use contracts::dashboards::d402_expiring_trials::ExpiringTrialsWidget;
use contracts::domain::a002_subscription::aggregate::SubscriptionId;
use contracts::usecases::u601_record_actions::{ActionOutcome, QuickAction};

use crate::shared::remote::{BillingGateway, GatewayError};

/// Загрузить виджет пробных подписок, истекающих в ближайшие `days_ahead` дней
pub async fn load(
    gateway: &dyn BillingGateway,
    today: NaiveDate,
    days_ahead: u32,
) -> Result<ExpiringTrialsWidget, GatewayError> {
    let subscriptions = gateway.get_expiring_trial_subscriptions(days_ahead).await?;
    let widget = ExpiringTrialsWidget::build(&subscriptions, today, days_ahead);
    tracing::info!(
        "Expiring trials as of {} ({} days ahead): {}",
        today,
        days_ahead,
        widget.expiring_count
    );
    Ok(widget)
}

/// Перевести пробную подписку в платную.
///
/// The widget is read before the activation and the converted row is then
/// dropped locally; the list is not fetched again afterwards.
pub async fn convert_to_paid(
    gateway: &dyn BillingGateway,
    subscription_id: &SubscriptionId,
    today: NaiveDate,
    days_ahead: u32,
) -> Result<ActionOutcome<ExpiringTrialsWidget>, GatewayError> {
    let mut widget = load(gateway, today, days_ahead).await?;

    gateway
        .activate_subscription(subscription_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to activate subscription {}: {}", subscription_id, e);
            e
        })?;
    tracing::info!("Subscription {} activated", subscription_id);

    if !widget.remove(subscription_id) {
        tracing::warn!(
            "Activated subscription {} was not in the expiring list",
            subscription_id
        );
    }
    Ok(ActionOutcome::success(QuickAction::Activate, widget))
}

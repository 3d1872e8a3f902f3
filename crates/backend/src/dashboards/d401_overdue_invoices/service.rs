use chrono::NaiveDate;
use contracts::dashboards::d401_overdue_invoices::{
    OverdueInvoicesDashboard, REMINDER_SENT_MESSAGE,
};
use contracts::domain::a001_invoice::aggregate::InvoiceId;
use contracts::usecases::u601_record_actions::{ActionOutcome, QuickAction};

use crate::shared::remote::{BillingGateway, GatewayError};

/// Загрузить дашборд просроченных счетов на дату `today`
pub async fn load(
    gateway: &dyn BillingGateway,
    today: NaiveDate,
) -> Result<OverdueInvoicesDashboard, GatewayError> {
    let invoices = gateway.get_overdue_invoices().await?;
    let dashboard = OverdueInvoicesDashboard::build(&invoices, today);
    tracing::info!(
        "Overdue dashboard as of {}: {} invoices, total {:.2}",
        today,
        dashboard.overdue_count,
        dashboard.total_overdue_amount
    );
    Ok(dashboard)
}

/// Отправить напоминание и перечитать дашборд
pub async fn send_reminder(
    gateway: &dyn BillingGateway,
    invoice_id: &InvoiceId,
    today: NaiveDate,
) -> Result<ActionOutcome<OverdueInvoicesDashboard>, GatewayError> {
    gateway.send_invoice(invoice_id).await.map_err(|e| {
        tracing::error!("Failed to send reminder for invoice {}: {}", invoice_id, e);
        e
    })?;
    tracing::info!("Reminder sent for invoice {}", invoice_id);

    let dashboard = load(gateway, today).await?;
    Ok(ActionOutcome::success_with(
        QuickAction::SendInvoice,
        REMINDER_SENT_MESSAGE,
        dashboard,
    ))
}

use axum::{extract::Path, Json};
use contracts::dashboards::d401_overdue_invoices::OverdueInvoicesDashboard;
use contracts::domain::a001_invoice::aggregate::InvoiceId;
use contracts::domain::common::AggregateId;
use contracts::usecases::u601_record_actions::ActionOutcome;

use super::error::ApiError;
use crate::dashboards::d401_overdue_invoices::service;
use crate::shared::{clock, remote};

/// GET /api/dashboards/overdue-invoices
pub async fn get_dashboard() -> Result<Json<OverdueInvoicesDashboard>, ApiError> {
    let gateway = remote::gateway()?;
    let dashboard = service::load(gateway.as_ref(), clock::today()).await?;
    Ok(Json(dashboard))
}

/// POST /api/dashboards/overdue-invoices/:id/send-reminder
pub async fn send_reminder(
    Path(id): Path<String>,
) -> Result<Json<ActionOutcome<OverdueInvoicesDashboard>>, ApiError> {
    let id = InvoiceId::from_string(&id).map_err(ApiError::bad_request)?;
    let gateway = remote::gateway()?;
    let outcome = service::send_reminder(gateway.as_ref(), &id, clock::today()).await?;
    Ok(Json(outcome))
}

use axum::{
    extract::{rejection::QueryRejection, Path, Query},
    Json,
};
use contracts::domain::a001_invoice::aggregate::{InvoiceDraft, InvoiceId};
use contracts::domain::common::AggregateId;
use contracts::usecases::u601_record_actions::{
    ActionOutcome, InvoiceCard, InvoiceDraftRequest, QuickAction,
};

use super::error::ApiError;
use crate::shared::{clock, remote};
use crate::usecases::u601_record_actions::executor;

fn parse_id(id: &str) -> Result<InvoiceId, ApiError> {
    InvoiceId::from_string(id).map_err(ApiError::bad_request)
}

/// GET /api/invoices/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<InvoiceCard>, ApiError> {
    let id = parse_id(&id)?;
    let gateway = remote::gateway()?;
    let card = executor::load_invoice_card(gateway.as_ref(), &id).await?;
    Ok(Json(card))
}

/// POST /api/invoices/:id/send
pub async fn send(Path(id): Path<String>) -> Result<Json<ActionOutcome<InvoiceCard>>, ApiError> {
    run(&id, QuickAction::SendInvoice).await
}

/// POST /api/invoices/:id/mark-paid
pub async fn mark_paid(
    Path(id): Path<String>,
) -> Result<Json<ActionOutcome<InvoiceCard>>, ApiError> {
    run(&id, QuickAction::MarkAsPaid).await
}

async fn run(id: &str, action: QuickAction) -> Result<Json<ActionOutcome<InvoiceCard>>, ApiError> {
    let id = parse_id(id)?;
    let gateway = remote::gateway()?;
    let outcome = executor::run_invoice_action(gateway.as_ref(), &id, action).await?;
    Ok(Json(outcome))
}

/// GET /api/invoices/draft?account_id=...
///
/// Значения по умолчанию для нового счёта, сам счёт не создаётся
pub async fn draft(
    query: Result<Query<InvoiceDraftRequest>, QueryRejection>,
) -> Result<Json<InvoiceDraft>, ApiError> {
    let Query(req) = query?;
    let draft = InvoiceDraft::for_account(&req.account_id, clock::today())
        .map_err(ApiError::bad_request)?;
    Ok(Json(draft))
}

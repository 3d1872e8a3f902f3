use axum::{
    extract::{rejection::QueryRejection, Path, Query},
    Json,
};
use contracts::dashboards::d402_expiring_trials::{ExpiringTrialsRequest, ExpiringTrialsWidget};
use contracts::domain::a002_subscription::aggregate::SubscriptionId;
use contracts::domain::common::AggregateId;
use contracts::usecases::u601_record_actions::ActionOutcome;

use super::error::ApiError;
use crate::dashboards::d402_expiring_trials::service;
use crate::shared::{clock, config, remote};

fn days_ahead(req: &ExpiringTrialsRequest) -> u32 {
    req.days_ahead.unwrap_or_else(config::expiring_days_ahead)
}

/// GET /api/dashboards/expiring-trials?days_ahead=N
pub async fn get_widget(
    query: Result<Query<ExpiringTrialsRequest>, QueryRejection>,
) -> Result<Json<ExpiringTrialsWidget>, ApiError> {
    let Query(req) = query?;
    let gateway = remote::gateway()?;
    let widget = service::load(gateway.as_ref(), clock::today(), days_ahead(&req)).await?;
    Ok(Json(widget))
}

/// POST /api/dashboards/expiring-trials/:id/convert?days_ahead=N
pub async fn convert_to_paid(
    Path(id): Path<String>,
    query: Result<Query<ExpiringTrialsRequest>, QueryRejection>,
) -> Result<Json<ActionOutcome<ExpiringTrialsWidget>>, ApiError> {
    let Query(req) = query?;
    let id = SubscriptionId::from_string(&id).map_err(ApiError::bad_request)?;
    let gateway = remote::gateway()?;
    let outcome =
        service::convert_to_paid(gateway.as_ref(), &id, clock::today(), days_ahead(&req)).await?;
    Ok(Json(outcome))
}

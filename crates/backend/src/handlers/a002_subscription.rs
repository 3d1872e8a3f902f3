use axum::{
    extract::{rejection::JsonRejection, Path},
    Json,
};
use contracts::domain::a002_subscription::aggregate::SubscriptionId;
use contracts::domain::common::AggregateId;
use contracts::usecases::u601_record_actions::{
    ActionOutcome, CancelSubscriptionRequest, QuickAction, SubscriptionCard,
};

use super::error::ApiError;
use crate::shared::remote;
use crate::usecases::u601_record_actions::executor;

fn parse_id(id: &str) -> Result<SubscriptionId, ApiError> {
    SubscriptionId::from_string(id).map_err(ApiError::bad_request)
}

/// GET /api/subscriptions/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<SubscriptionCard>, ApiError> {
    let id = parse_id(&id)?;
    let gateway = remote::gateway()?;
    let card = executor::load_subscription_card(gateway.as_ref(), &id).await?;
    Ok(Json(card))
}

/// POST /api/subscriptions/:id/activate
pub async fn activate(
    Path(id): Path<String>,
) -> Result<Json<ActionOutcome<SubscriptionCard>>, ApiError> {
    let id = parse_id(&id)?;
    let gateway = remote::gateway()?;
    let outcome =
        executor::run_subscription_action(gateway.as_ref(), &id, QuickAction::Activate, None)
            .await?;
    Ok(Json(outcome))
}

/// POST /api/subscriptions/:id/cancel, body `{"reason": "..."}`
pub async fn cancel(
    Path(id): Path<String>,
    payload: Result<Json<CancelSubscriptionRequest>, JsonRejection>,
) -> Result<Json<ActionOutcome<SubscriptionCard>>, ApiError> {
    let Json(req) = payload?;
    let id = parse_id(&id)?;
    let gateway = remote::gateway()?;
    let outcome = executor::run_subscription_action(
        gateway.as_ref(),
        &id,
        QuickAction::Cancel,
        req.reason.as_deref(),
    )
    .await?;
    Ok(Json(outcome))
}

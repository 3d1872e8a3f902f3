use axum::{extract::Path, Json};
use contracts::enums::record_kind::RecordKind;
use contracts::domain::common::aggregate_id::validate_raw_id;
use contracts::usecases::u601_record_actions::ActionState;

use super::error::ApiError;
use crate::shared::remote;
use crate::usecases::u601_record_actions::executor;

/// GET /api/records/:object_api_name/:id/actions
pub async fn get_actions(
    Path((object_api_name, id)): Path<(String, String)>,
) -> Result<Json<Vec<ActionState>>, ApiError> {
    let kind = RecordKind::from_object_api_name(&object_api_name).ok_or_else(|| {
        ApiError::bad_request(format!("Quick actions are not available for {}", object_api_name))
    })?;
    let id = validate_raw_id(&id).map_err(ApiError::bad_request)?;
    let gateway = remote::gateway()?;
    let states = executor::load_action_states(gateway.as_ref(), kind, &id).await?;
    Ok(Json(states))
}

use axum::extract::rejection::JsonRejection;
use axum::Json;
use chrono::{NaiveDateTime, NaiveTime};
use contracts::shared::date_utils::parse_calendar_datetime;
use contracts::shared::urgency::{classify, ClassifyRequest, ClassifyResponse};

use super::error::ApiError;
use crate::shared::clock;

fn parse_field(name: &str, value: &str) -> Result<NaiveDateTime, ApiError> {
    parse_calendar_datetime(value)
        .ok_or_else(|| ApiError::bad_request(format!("Unrecognized date in '{}': {}", name, value)))
}

/// Разобрать запрос и классифицировать дату
fn evaluate(req: &ClassifyRequest, default_today: NaiveDateTime) -> Result<ClassifyResponse, ApiError> {
    let today = match req.today.as_deref() {
        Some(value) => parse_field("today", value)?,
        None => default_today,
    };
    let target_date = req
        .target_date
        .as_deref()
        .map(|value| parse_field("target_date", value))
        .transpose()?;

    let classification = classify(today, target_date, req.mode);
    Ok(ClassifyResponse::new(classification, req.mode))
}

/// POST /api/classify
pub async fn classify_date(
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let Json(req) = payload?;
    let default_today = clock::today().and_time(NaiveTime::default());
    evaluate(&req, default_today).map(Json)
}

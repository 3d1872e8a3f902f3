use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::remote_error::ErrorPayload;
use thiserror::Error;

use crate::shared::remote::GatewayError;
use crate::usecases::u601_record_actions::executor::RecordActionError;

/// Ошибка HTTP API: статус + JSON `{title, message}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {}", .0.message)]
    BadRequest(ErrorPayload),

    #[error("not found: {}", .0.message)]
    NotFound(ErrorPayload),

    #[error("conflict: {}", .0.message)]
    Conflict(ErrorPayload),

    #[error("upstream: {}", .0.message)]
    Upstream(ErrorPayload),

    #[error("internal: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(ErrorPayload::new("Invalid request", message))
    }
}

/// Тело запроса не разобрано: отсутствует, не JSON или не той формы
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected JSON body: {}", rejection.body_text());
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!("Rejected query string: {}", rejection.body_text());
        ApiError::bad_request(rejection.body_text())
    }
}

/// Ошибки дашбордов: заголовок "Error", текст по умолчанию для дашбордов
impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        let payload = ErrorPayload::new("Error", err.user_message());
        match err {
            GatewayError::NotFound(_) => ApiError::NotFound(payload),
            _ => ApiError::Upstream(payload),
        }
    }
}

impl From<RecordActionError> for ApiError {
    fn from(err: RecordActionError) -> Self {
        let payload = err.payload();
        match err {
            RecordActionError::Invalid(_) => ApiError::BadRequest(payload),
            RecordActionError::Rejected(_) => ApiError::Conflict(payload),
            RecordActionError::Failed {
                source: GatewayError::NotFound(_),
                ..
            } => ApiError::NotFound(payload),
            RecordActionError::Failed { .. } => ApiError::Upstream(payload),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, payload) = match self {
            ApiError::BadRequest(p) => (StatusCode::BAD_REQUEST, p),
            ApiError::NotFound(p) => (StatusCode::NOT_FOUND, p),
            ApiError::Conflict(p) => (StatusCode::CONFLICT, p),
            ApiError::Upstream(p) => (StatusCode::BAD_GATEWAY, p),
            ApiError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorPayload::new("Error", "Internal server error"),
                )
            }
        };
        (status, Json(payload)).into_response()
    }
}

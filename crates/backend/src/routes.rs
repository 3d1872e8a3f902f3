use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D401 Overdue Invoices
        .route(
            "/api/dashboards/overdue-invoices",
            get(handlers::d401_overdue_invoices::get_dashboard),
        )
        .route(
            "/api/dashboards/overdue-invoices/:id/send-reminder",
            post(handlers::d401_overdue_invoices::send_reminder),
        )
        // D402 Expiring Trials
        .route(
            "/api/dashboards/expiring-trials",
            get(handlers::d402_expiring_trials::get_widget),
        )
        .route(
            "/api/dashboards/expiring-trials/:id/convert",
            post(handlers::d402_expiring_trials::convert_to_paid),
        )
        // ========================================
        // RECORDS
        // ========================================
        // A001 Invoice (draft is registered before :id)
        .route("/api/invoices/draft", get(handlers::a001_invoice::draft))
        .route("/api/invoices/:id", get(handlers::a001_invoice::get_by_id))
        .route("/api/invoices/:id/send", post(handlers::a001_invoice::send))
        .route(
            "/api/invoices/:id/mark-paid",
            post(handlers::a001_invoice::mark_paid),
        )
        // A002 Subscription
        .route(
            "/api/subscriptions/:id",
            get(handlers::a002_subscription::get_by_id),
        )
        .route(
            "/api/subscriptions/:id/activate",
            post(handlers::a002_subscription::activate),
        )
        .route(
            "/api/subscriptions/:id/cancel",
            post(handlers::a002_subscription::cancel),
        )
        // U601 Quick actions for any supported record
        .route(
            "/api/records/:object_api_name/:id/actions",
            get(handlers::record_actions::get_actions),
        )
        // Urgency classifier
        .route("/api/classify", post(handlers::classify::classify_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = configure_routes().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn assert_bad_request(status: StatusCode, body: &Value) {
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["title"], "Invalid request");
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    }

    #[tokio::test]
    async fn test_classify() {
        let (status, body) = send(post_json(
            "/api/classify",
            r#"{"today":"2025-01-10","target_date":"2025-01-13","mode":"expiring_soon"}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["day_offset"], 3);
        assert_eq!(body["label"], "3 days left");
        assert_eq!(body["badge_variant"], "warning");
    }

    #[tokio::test]
    async fn test_unknown_mode_is_json_bad_request() {
        let (status, body) = send(post_json("/api/classify", r#"{"mode":"bogus"}"#)).await;
        assert_bad_request(status, &body);
    }

    #[tokio::test]
    async fn test_invalid_days_ahead_is_json_bad_request() {
        let (status, body) = send(get("/api/dashboards/expiring-trials?days_ahead=abc")).await;
        assert_bad_request(status, &body);

        let (status, body) =
            send(Request::post("/api/dashboards/expiring-trials/s1/convert?days_ahead=-1")
                .body(Body::empty())
                .unwrap())
            .await;
        assert_bad_request(status, &body);
    }

    #[tokio::test]
    async fn test_draft_requires_account() {
        let (status, body) = send(get("/api/invoices/draft")).await;
        assert_bad_request(status, &body);

        let (status, body) = send(get("/api/invoices/draft?account_id=%20")).await;
        assert_bad_request(status, &body);

        let (status, body) = send(get("/api/invoices/draft?account_id=001XX")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["accountId"], "001XX");
        assert_eq!(body["taxRate"], 22.0);
    }

    #[tokio::test]
    async fn test_cancel_without_body_is_json_bad_request() {
        let request = Request::post("/api/subscriptions/s1/cancel")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_bad_request(status, &body);
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback shown by dashboards when the payload carries no message
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred. Please try again.";

/// Fallback shown by record quick actions
pub const UNKNOWN_ACTION_ERROR_MESSAGE: &str =
    "An unknown error occurred. Please try again or contact your administrator.";

/// Ошибка, возвращаемая клиенту: заголовок + сообщение
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub title: String,
    pub message: String,
}

impl ErrorPayload {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Extract a user-facing message from an error payload of the billing tier.
///
/// Precedence: `body.message`, then `message`, then the `message` of every
/// entry of an array `body` joined with ", ".
pub fn extract_message(payload: &Value) -> Option<String> {
    if let Some(message) = payload
        .get("body")
        .and_then(|b| b.get("message"))
        .and_then(non_empty_str)
    {
        return Some(message.to_string());
    }
    if let Some(message) = payload.get("message").and_then(non_empty_str) {
        return Some(message.to_string());
    }
    if let Some(entries) = payload.get("body").and_then(Value::as_array) {
        let joined = entries
            .iter()
            .map(|e| e.get("message").and_then(Value::as_str).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(", ");
        return Some(joined);
    }
    None
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_message_wins() {
        let payload = json!({"body": {"message": "Invoice locked"}, "message": "outer"});
        assert_eq!(extract_message(&payload).as_deref(), Some("Invoice locked"));
    }

    #[test]
    fn test_top_level_message() {
        let payload = json!({"message": "Timeout"});
        assert_eq!(extract_message(&payload).as_deref(), Some("Timeout"));
    }

    #[test]
    fn test_array_body_is_joined() {
        let payload = json!({"body": [{"message": "First"}, {"message": "Second"}]});
        assert_eq!(extract_message(&payload).as_deref(), Some("First, Second"));
    }

    #[test]
    fn test_no_message() {
        assert_eq!(extract_message(&json!({"status": 500})), None);
        assert_eq!(extract_message(&json!({})), None);
        assert_eq!(extract_message(&Value::Null), None);
    }
}

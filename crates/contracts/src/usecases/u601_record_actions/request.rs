use serde::{Deserialize, Serialize};

/// Тело запроса отмены подписки
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CancelSubscriptionRequest {
    pub reason: Option<String>,
}

/// Параметры создания черновика счёта
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDraftRequest {
    pub account_id: String,
}

//! Client side of the remote billing tier
//!
//! What the billing operations actually do lives on the remote side; this
//! module only forwards calls and maps the returned records.

pub mod http_gateway;
pub mod models;

#[cfg(test)]
pub mod fake;

use std::sync::Arc;

use async_trait::async_trait;
use contracts::domain::a001_invoice::aggregate::{Invoice, InvoiceId};
use contracts::domain::a002_subscription::aggregate::{Subscription, SubscriptionId};
use contracts::shared::remote_error::UNKNOWN_ERROR_MESSAGE;
use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::shared::config::RemoteConfig;

static GATEWAY: OnceCell<Arc<dyn BillingGateway>> = OnceCell::new();

/// Ошибки обращения к биллингу
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),

    /// `message` is `None` when the error body carried no usable text
    #[error("Billing tier returned HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    Remote {
        status: u16,
        message: Option<String>,
    },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Record not found: {0}")]
    NotFound(String),
}

impl GatewayError {
    /// Message suitable for showing to a user, dashboard fallback
    pub fn user_message(&self) -> String {
        self.user_message_or(UNKNOWN_ERROR_MESSAGE)
    }

    /// Message suitable for showing to a user; `fallback` when the billing
    /// tier sent an error without one
    pub fn user_message_or(&self, fallback: &str) -> String {
        match self {
            GatewayError::Remote {
                message: Some(message),
                ..
            } => message.clone(),
            GatewayError::Remote { message: None, .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

/// Трейт для клиента биллинга
#[async_trait]
pub trait BillingGateway: Send + Sync {
    /// Счета с истёкшим сроком оплаты
    async fn get_overdue_invoices(&self) -> Result<Vec<Invoice>, GatewayError>;

    /// Пробные подписки, истекающие в ближайшие `days_ahead` дней
    async fn get_expiring_trial_subscriptions(
        &self,
        days_ahead: u32,
    ) -> Result<Vec<Subscription>, GatewayError>;

    async fn get_invoice(&self, id: &InvoiceId) -> Result<Invoice, GatewayError>;

    async fn get_subscription(&self, id: &SubscriptionId) -> Result<Subscription, GatewayError>;

    async fn send_invoice(&self, id: &InvoiceId) -> Result<(), GatewayError>;

    async fn mark_as_paid(&self, id: &InvoiceId) -> Result<(), GatewayError>;

    async fn activate_subscription(&self, id: &SubscriptionId) -> Result<(), GatewayError>;

    async fn cancel_subscription(
        &self,
        id: &SubscriptionId,
        reason: &str,
    ) -> Result<(), GatewayError>;
}

/// Create the HTTP gateway once at startup
pub fn initialize_gateway(config: &RemoteConfig) -> anyhow::Result<()> {
    let gateway = http_gateway::HttpBillingGateway::new(config)?;
    tracing::info!("Billing gateway: {}", config.base_url);
    GATEWAY
        .set(Arc::new(gateway))
        .map_err(|_| anyhow::anyhow!("billing gateway already initialized"))
}

/// Shared gateway instance
pub fn gateway() -> anyhow::Result<Arc<dyn BillingGateway>> {
    GATEWAY
        .get()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("billing gateway is not initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::remote_error::UNKNOWN_ACTION_ERROR_MESSAGE;

    #[test]
    fn test_user_message_fallbacks() {
        let silent = GatewayError::Remote {
            status: 500,
            message: None,
        };
        assert_eq!(silent.user_message(), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(
            silent.user_message_or(UNKNOWN_ACTION_ERROR_MESSAGE),
            UNKNOWN_ACTION_ERROR_MESSAGE
        );

        let explained = GatewayError::Remote {
            status: 400,
            message: Some("Invoice is locked".into()),
        };
        assert_eq!(
            explained.user_message_or(UNKNOWN_ACTION_ERROR_MESSAGE),
            "Invoice is locked"
        );

        let network = GatewayError::Network("timeout".into());
        assert_eq!(network.user_message(), "Network error: timeout");
    }
}

use async_trait::async_trait;
use contracts::domain::a001_invoice::aggregate::{Invoice, InvoiceId};
use contracts::domain::a002_subscription::aggregate::{Subscription, SubscriptionId};
use contracts::shared::remote_error::{extract_message, UNKNOWN_ERROR_MESSAGE};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::models::{RemoteInvoice, RemoteSubscription};
use super::{BillingGateway, GatewayError};
use crate::shared::config::RemoteConfig;

const INVOICE_CONTROLLER: &str = "InvoiceController";
const SUBSCRIPTION_CONTROLLER: &str = "SubscriptionController";

/// HTTP-клиент биллинга: POST <base_url>/<Controller>/<method> с JSON-аргументами
pub struct HttpBillingGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBillingGateway {
    pub fn new(config: &RemoteConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, controller: &str, method: &str) -> String {
        format!("{}/{}/{}", self.base_url, controller, method)
    }

    async fn call(&self, controller: &str, method: &str, args: Value) -> Result<Value, GatewayError> {
        let url = self.url(controller, method);
        tracing::debug!("Billing API: POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(&args)
            .send()
            .await
            .map_err(|e| GatewayError::Network(format!("{}: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(format!("{}: {}", url, e)))?;

        if !status.is_success() {
            let message = error_message(&body);
            tracing::warn!(
                "Billing API: {} for {}: {}",
                status,
                url,
                message.as_deref().unwrap_or("<no message>")
            );
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(GatewayError::NotFound(
                    message.unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
                ));
            }
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|e| GatewayError::Decode(format!("{}: {}", url, e)))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        controller: &str,
        method: &str,
        args: Value,
    ) -> Result<T, GatewayError> {
        let value = self.call(controller, method, args).await?;
        serde_json::from_value(value)
            .map_err(|e| GatewayError::Decode(format!("{}/{}: {}", controller, method, e)))
    }
}

/// Error bodies come either as an object or as a bare array of `{message}` entries.
///
/// `None` when there is no message; the caller picks the fallback text.
fn error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(entries)) => extract_message(&json!({ "body": entries })),
        Ok(payload) => extract_message(&payload),
        Err(_) if !body.trim().is_empty() => Some(body.trim().to_string()),
        Err(_) => None,
    }
}

#[async_trait]
impl BillingGateway for HttpBillingGateway {
    async fn get_overdue_invoices(&self) -> Result<Vec<Invoice>, GatewayError> {
        let records: Vec<RemoteInvoice> = self
            .fetch(INVOICE_CONTROLLER, "getOverdueInvoices", json!({}))
            .await?;
        tracing::info!("Billing API: got {} overdue invoices", records.len());
        Ok(records.into_iter().map(RemoteInvoice::into_invoice).collect())
    }

    async fn get_expiring_trial_subscriptions(
        &self,
        days_ahead: u32,
    ) -> Result<Vec<Subscription>, GatewayError> {
        let records: Vec<RemoteSubscription> = self
            .fetch(
                SUBSCRIPTION_CONTROLLER,
                "getExpiringTrialSubscriptions",
                json!({ "daysAhead": days_ahead }),
            )
            .await?;
        tracing::info!(
            "Billing API: got {} trials expiring in {} days",
            records.len(),
            days_ahead
        );
        Ok(records
            .into_iter()
            .map(RemoteSubscription::into_subscription)
            .collect())
    }

    async fn get_invoice(&self, id: &InvoiceId) -> Result<Invoice, GatewayError> {
        let record: Option<RemoteInvoice> = self
            .fetch(
                INVOICE_CONTROLLER,
                "getInvoiceWithRelated",
                json!({ "invoiceId": id.0 }),
            )
            .await?;
        record
            .map(RemoteInvoice::into_invoice)
            .ok_or_else(|| GatewayError::NotFound(format!("invoice {}", id)))
    }

    async fn get_subscription(&self, id: &SubscriptionId) -> Result<Subscription, GatewayError> {
        let record: Option<RemoteSubscription> = self
            .fetch(
                SUBSCRIPTION_CONTROLLER,
                "getSubscriptionWithRelated",
                json!({ "subscriptionId": id.0 }),
            )
            .await?;
        record
            .map(RemoteSubscription::into_subscription)
            .ok_or_else(|| GatewayError::NotFound(format!("subscription {}", id)))
    }

    async fn send_invoice(&self, id: &InvoiceId) -> Result<(), GatewayError> {
        self.call(INVOICE_CONTROLLER, "sendInvoice", json!({ "invoiceId": id.0 }))
            .await
            .map(|_| ())
    }

    async fn mark_as_paid(&self, id: &InvoiceId) -> Result<(), GatewayError> {
        self.call(INVOICE_CONTROLLER, "markAsPaid", json!({ "invoiceId": id.0 }))
            .await
            .map(|_| ())
    }

    async fn activate_subscription(&self, id: &SubscriptionId) -> Result<(), GatewayError> {
        self.call(
            SUBSCRIPTION_CONTROLLER,
            "activateSubscription",
            json!({ "subscriptionId": id.0 }),
        )
        .await
        .map(|_| ())
    }

    async fn cancel_subscription(
        &self,
        id: &SubscriptionId,
        reason: &str,
    ) -> Result<(), GatewayError> {
        self.call(
            SUBSCRIPTION_CONTROLLER,
            "cancelSubscription",
            json!({ "subscriptionId": id.0, "reason": reason }),
        )
        .await
        .map(|_| ())
    }
}

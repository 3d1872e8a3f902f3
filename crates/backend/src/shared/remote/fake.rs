//! In-memory billing tier for service tests

use std::sync::Mutex;

use async_trait::async_trait;
use contracts::domain::a001_invoice::aggregate::{Invoice, InvoiceId, InvoiceStatus};
use contracts::domain::a002_subscription::aggregate::{
    Subscription, SubscriptionId, SubscriptionStatus,
};

use super::{BillingGateway, GatewayError};

#[derive(Default)]
pub struct FakeGateway {
    pub invoices: Mutex<Vec<Invoice>>,
    pub subscriptions: Mutex<Vec<Subscription>>,
    /// Every call, in order, e.g. "send_invoice:a01"
    pub calls: Mutex<Vec<String>>,
    /// When set, mutating calls fail; the inner value is the message the
    /// billing tier sends back, `None` for an error body without one
    pub fail_with: Option<Option<String>>,
}

impl FakeGateway {
    pub fn new(invoices: Vec<Invoice>, subscriptions: Vec<Subscription>) -> Self {
        Self {
            invoices: Mutex::new(invoices),
            subscriptions: Mutex::new(subscriptions),
            ..Default::default()
        }
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(Some(message.to_string()));
        self
    }

    pub fn failing_without_message(mut self) -> Self {
        self.fail_with = Some(None);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_failure(&self) -> Result<(), GatewayError> {
        match &self.fail_with {
            Some(message) => Err(GatewayError::Remote {
                status: 400,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn update_invoice(&self, id: &InvoiceId, f: impl FnOnce(&mut Invoice)) -> Result<(), GatewayError> {
        let mut invoices = self.invoices.lock().unwrap();
        let invoice = invoices
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| GatewayError::NotFound(format!("invoice {}", id)))?;
        f(invoice);
        Ok(())
    }

    fn update_subscription(
        &self,
        id: &SubscriptionId,
        f: impl FnOnce(&mut Subscription),
    ) -> Result<(), GatewayError> {
        let mut subscriptions = self.subscriptions.lock().unwrap();
        let subscription = subscriptions
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| GatewayError::NotFound(format!("subscription {}", id)))?;
        f(subscription);
        Ok(())
    }
}

#[async_trait]
impl BillingGateway for FakeGateway {
    async fn get_overdue_invoices(&self) -> Result<Vec<Invoice>, GatewayError> {
        self.record("get_overdue_invoices".into());
        Ok(self
            .invoices
            .lock()
            .unwrap()
            .iter()
            .filter(|i| {
                !matches!(
                    i.status,
                    Some(InvoiceStatus::Paid) | Some(InvoiceStatus::Voided)
                )
            })
            .cloned()
            .collect())
    }

    async fn get_expiring_trial_subscriptions(
        &self,
        days_ahead: u32,
    ) -> Result<Vec<Subscription>, GatewayError> {
        self.record(format!("get_expiring_trial_subscriptions:{}", days_ahead));
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.status == Some(SubscriptionStatus::Trial))
            .cloned()
            .collect())
    }

    async fn get_invoice(&self, id: &InvoiceId) -> Result<Invoice, GatewayError> {
        self.record(format!("get_invoice:{}", id));
        self.invoices
            .lock()
            .unwrap()
            .iter()
            .find(|i| &i.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(format!("invoice {}", id)))
    }

    async fn get_subscription(&self, id: &SubscriptionId) -> Result<Subscription, GatewayError> {
        self.record(format!("get_subscription:{}", id));
        self.subscriptions
            .lock()
            .unwrap()
            .iter()
            .find(|s| &s.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(format!("subscription {}", id)))
    }

    async fn send_invoice(&self, id: &InvoiceId) -> Result<(), GatewayError> {
        self.record(format!("send_invoice:{}", id));
        self.check_failure()?;
        self.update_invoice(id, |i| {
            i.reminders_sent = Some(i.reminders_sent.unwrap_or(0) + 1);
            if i.status == Some(InvoiceStatus::Draft) {
                i.status = Some(InvoiceStatus::Sent);
            }
        })
    }

    async fn mark_as_paid(&self, id: &InvoiceId) -> Result<(), GatewayError> {
        self.record(format!("mark_as_paid:{}", id));
        self.check_failure()?;
        self.update_invoice(id, |i| i.status = Some(InvoiceStatus::Paid))
    }

    async fn activate_subscription(&self, id: &SubscriptionId) -> Result<(), GatewayError> {
        self.record(format!("activate_subscription:{}", id));
        self.check_failure()?;
        self.update_subscription(id, |s| s.status = Some(SubscriptionStatus::Active))
    }

    async fn cancel_subscription(
        &self,
        id: &SubscriptionId,
        reason: &str,
    ) -> Result<(), GatewayError> {
        self.record(format!("cancel_subscription:{}:{}", id, reason));
        self.check_failure()?;
        self.update_subscription(id, |s| {
            s.status = Some(SubscriptionStatus::Cancelled);
            s.cancellation_reason = Some(reason.to_string());
        })
    }
}

// Mock Payment Gateway
//
// Records every call so tests can assert on exactly what would have been
// sent to the provider, and answers with a canned intent or error.

use async_trait::async_trait;
use payrelay::core::{AppError, Result};
use payrelay::gateways::{CreatePaymentIntentParams, PaymentGateway, PaymentIntent};
use serde_json::json;
use std::sync::Mutex;

pub struct MockGateway {
    status: String,
    failure: Option<String>,
    pub created: Mutex<Vec<CreatePaymentIntentParams>>,
    pub retrieved: Mutex<Vec<String>>,
}

impl MockGateway {
    /// Gateway whose intents report `status`
    pub fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            failure: None,
            created: Mutex::new(Vec::new()),
            retrieved: Mutex::new(Vec::new()),
        }
    }

    /// Gateway that rejects every call with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::with_status("requires_payment_method")
        }
    }

    pub fn created_calls(&self) -> Vec<CreatePaymentIntentParams> {
        self.created.lock().unwrap().clone()
    }

    pub fn retrieved_calls(&self) -> Vec<String> {
        self.retrieved.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.created.lock().unwrap().len() + self.retrieved.lock().unwrap().len()
    }

    fn intent(&self, id: &str, amount: i64, currency: &str) -> PaymentIntent {
        serde_json::from_value(json!({
            "id": id,
            "object": "payment_intent",
            "status": self.status,
            "client_secret": format!("{}_secret_test", id),
            "amount": amount,
            "currency": currency,
            "automatic_payment_methods": { "enabled": true },
            "livemode": false
        }))
        .expect("valid mock intent")
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_payment_intent(
        &self,
        params: CreatePaymentIntentParams,
    ) -> Result<PaymentIntent> {
        self.created.lock().unwrap().push(params.clone());

        match &self.failure {
            Some(message) => Err(AppError::provider(message.clone())),
            None => Ok(self.intent("pi_mock_created", params.amount, &params.currency)),
        }
    }

    async fn retrieve_payment_intent(&self, payment_intent_id: &str) -> Result<PaymentIntent> {
        self.retrieved
            .lock()
            .unwrap()
            .push(payment_intent_id.to_string());

        match &self.failure {
            Some(message) => Err(AppError::provider(message.clone())),
            None => Ok(self.intent(payment_intent_id, 1000, "usd")),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

// Test Data Factory
//
// Builds request payloads and signed webhook deliveries.

use payrelay::webhooks::WebhookVerifier;
use serde_json::{json, Value};

pub const TEST_WEBHOOK_SECRET: &str = "whsec_integration_test_secret";

pub const TEST_TOLERANCE_SECS: i64 = 300;

/// Test data factory for request payloads
pub struct TestDataFactory;

impl TestDataFactory {
    /// Create-intent payload with only an amount
    pub fn intent_payload(amount: impl Into<Value>) -> Value {
        json!({ "amount": amount.into() })
    }

    /// Create-intent payload with every optional field set
    pub fn full_intent_payload() -> Value {
        json!({
            "amount": 2599,
            "currency": "eur",
            "description": "Order #1001",
            "metadata": { "order_id": "1001", "customer": "cus_42" }
        })
    }

    /// Provider event body as raw bytes
    pub fn event_body(event_type: &str, payment_intent_id: &str) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "id": "evt_test_1",
            "object": "event",
            "type": event_type,
            "created": chrono::Utc::now().timestamp(),
            "data": {
                "object": {
                    "id": payment_intent_id,
                    "object": "payment_intent",
                    "status": "succeeded",
                    "last_payment_error": null
                }
            }
        }))
        .expect("serializable event")
    }

    /// Signature header for `body` signed now with the test secret
    pub fn sign(body: &[u8]) -> String {
        Self::sign_at(body, chrono::Utc::now().timestamp())
    }

    pub fn sign_at(body: &[u8], timestamp: i64) -> String {
        WebhookVerifier::new(TEST_WEBHOOK_SECRET, TEST_TOLERANCE_SECS)
            .sign(body, timestamp)
            .expect("signable payload")
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PAYMENT_INTENT_SUCCEEDED: &str = "payment_intent.succeeded";
pub const PAYMENT_INTENT_PAYMENT_FAILED: &str = "payment_intent.payment_failed";

/// Provider event delivered to the webhook endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "type")]
    pub event_type: String,

    pub data: EventData,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
}

/// Event payload; opaque apart from the object id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    pub object: Value,
}

/// Event types the relay knows how to report on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    PaymentIntentSucceeded {
        payment_intent_id: Option<String>,
    },
    PaymentIntentPaymentFailed {
        payment_intent_id: Option<String>,
        failure_message: Option<String>,
    },
    Unrecognized {
        event_type: String,
    },
}

impl WebhookEvent {
    /// Id of the object the event refers to
    pub fn object_id(&self) -> Option<&str> {
        self.data.object.get("id").and_then(Value::as_str)
    }

    pub fn kind(&self) -> EventKind {
        let payment_intent_id = self.object_id().map(String::from);

        match self.event_type.as_str() {
            PAYMENT_INTENT_SUCCEEDED => EventKind::PaymentIntentSucceeded { payment_intent_id },
            PAYMENT_INTENT_PAYMENT_FAILED => EventKind::PaymentIntentPaymentFailed {
                payment_intent_id,
                failure_message: self
                    .data
                    .object
                    .pointer("/last_payment_error/message")
                    .and_then(Value::as_str)
                    .map(String::from),
            },
            other => EventKind::Unrecognized {
                event_type: other.to_string(),
            },
        }
    }
}

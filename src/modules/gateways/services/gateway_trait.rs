use crate::core::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Provider status of a payment intent that has collected its funds
pub const PAYMENT_INTENT_SUCCEEDED: &str = "succeeded";

/// Payment provider operations the relay delegates to
///
/// Implementations hold no per-request state; a single instance is shared by
/// every handler for the lifetime of the server.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment intent and return the provider object
    async fn create_payment_intent(&self, params: CreatePaymentIntentParams)
        -> Result<PaymentIntent>;

    /// Fetch the current provider state of a payment intent
    async fn retrieve_payment_intent(&self, payment_intent_id: &str) -> Result<PaymentIntent>;

    /// Get gateway name
    fn name(&self) -> &str;
}

/// Validated parameters for a create-payment-intent call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePaymentIntentParams {
    /// Amount in whole minor units
    pub amount: i64,

    /// Lowercase ISO currency code
    pub currency: String,

    pub description: Option<String>,

    pub metadata: BTreeMap<String, String>,

    /// Let the provider choose eligible payment methods
    pub automatic_payment_methods: bool,
}

/// Payment intent as returned by the provider
///
/// Fields the relay does not interpret are kept in `extra` so the object can
/// be handed back to clients unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,

    pub status: String,

    #[serde(default)]
    pub client_secret: Option<String>,

    #[serde(default)]
    pub amount: i64,

    #[serde(default)]
    pub currency: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaymentIntent {
    pub fn is_succeeded(&self) -> bool {
        self.status == PAYMENT_INTENT_SUCCEEDED
    }
}

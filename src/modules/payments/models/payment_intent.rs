use crate::core::{validate_amount, AppError, Result};
use crate::modules::gateways::{CreatePaymentIntentParams, PaymentIntent};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_CURRENCY: &str = "usd";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Amount as sent by browser clients: a JSON number or a numeric string
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Unparseable strings become `None` so they fail the amount check,
/// not body deserialization
fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawAmount>::deserialize(deserializer)? {
        Some(RawAmount::Number(value)) => Some(value),
        Some(RawAmount::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

/// Body of `POST /api/create-payment-intent`
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntentRequest {
    /// Amount in the smallest currency unit; may arrive fractional
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: Option<f64>,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl PaymentIntentRequest {
    /// Validate the request and build provider parameters
    pub fn into_params(self) -> Result<CreatePaymentIntentParams> {
        let amount = validate_amount(self.amount)?;

        let currency = match self.currency.trim() {
            "" => DEFAULT_CURRENCY.to_string(),
            code => code.to_lowercase(),
        };

        Ok(CreatePaymentIntentParams {
            amount,
            currency,
            description: self.description.filter(|d| !d.trim().is_empty()),
            metadata: self.metadata,
            automatic_payment_methods: true,
        })
    }
}

/// Successful response of `POST /api/create-payment-intent`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntentResponse {
    pub client_secret: String,
    pub payment_intent_id: String,
}

impl TryFrom<PaymentIntent> for PaymentIntentResponse {
    type Error = AppError;

    fn try_from(intent: PaymentIntent) -> Result<Self> {
        let client_secret = intent.client_secret.ok_or_else(|| {
            AppError::provider(format!(
                "Payment intent {} was returned without a client secret",
                intent.id
            ))
        })?;

        Ok(Self {
            client_secret,
            payment_intent_id: intent.id,
        })
    }
}

/// Body of `POST /api/confirm-payment`
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmPaymentRequest {
    pub payment_intent_id: String,
}

impl ConfirmPaymentRequest {
    /// Rejects ids that could not name a provider object
    ///
    /// Provider ids are ASCII alphanumerics and underscores; anything else
    /// would alter the request path sent upstream.
    pub fn validated_id(&self) -> Result<&str> {
        let id = self.payment_intent_id.trim();

        if id.is_empty() {
            return Err(AppError::validation("payment_intent_id is required"));
        }

        if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(AppError::validation("payment_intent_id is malformed"));
        }

        Ok(id)
    }
}

/// Outcome of looking up a payment intent
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentConfirmation {
    /// Funds collected; carries the full provider object
    Succeeded(PaymentIntent),

    /// Any other provider status
    NotSucceeded { status: String },
}

impl From<PaymentIntent> for PaymentConfirmation {
    fn from(intent: PaymentIntent) -> Self {
        if intent.is_succeeded() {
            PaymentConfirmation::Succeeded(intent)
        } else {
            PaymentConfirmation::NotSucceeded {
                status: intent.status,
            }
        }
    }
}

/// Wire shape of `POST /api/confirm-payment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_intent: Option<PaymentIntent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl From<PaymentConfirmation> for ConfirmationResponse {
    fn from(confirmation: PaymentConfirmation) -> Self {
        match confirmation {
            PaymentConfirmation::Succeeded(intent) => Self {
                success: true,
                payment_intent: Some(intent),
                status: None,
            },
            PaymentConfirmation::NotSucceeded { status } => Self {
                success: false,
                payment_intent: None,
                status: Some(status),
            },
        }
    }
}

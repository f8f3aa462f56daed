use super::gateway_trait::{CreatePaymentIntentParams, PaymentGateway, PaymentIntent};
use crate::config::StripeConfig;
use crate::core::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use tracing::{debug, warn};

/// Stripe REST API client
///
/// Implements PaymentGateway over the form-encoded `/v1/payment_intents`
/// endpoints. API Documentation: https://docs.stripe.com/api/payment_intents
pub struct StripeClient {
    client: Client,
    secret_key: String,
    api_version: Option<String>,
    base_url: String,
}

impl StripeClient {
    /// Create a new Stripe client from provider configuration
    pub fn new(config: &StripeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            secret_key: config.secret_key.clone(),
            api_version: config.api_version.clone(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request
            .bearer_auth(&self.secret_key)
            .header("Accept", "application/json");

        match &self.api_version {
            Some(version) => request.header("Stripe-Version", version),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, operation: &str) -> Result<PaymentIntent> {
        let response = request.send().await.map_err(|e| {
            warn!(operation, error = %e, "Stripe request failed");
            if e.is_timeout() {
                AppError::provider(format!("Stripe request timed out: {}", e))
            } else if e.is_connect() {
                AppError::provider(format!("Stripe unavailable: {}", e))
            } else {
                AppError::provider(format!("Stripe API request failed: {}", e))
            }
        })?;

        parse_response(response, operation).await
    }
}

/// Flattens create parameters into Stripe's bracketed form encoding
pub fn encode_create_params(params: &CreatePaymentIntentParams) -> Vec<(String, String)> {
    let mut form = vec![
        ("amount".to_string(), params.amount.to_string()),
        ("currency".to_string(), params.currency.clone()),
    ];

    if params.automatic_payment_methods {
        form.push((
            "automatic_payment_methods[enabled]".to_string(),
            "true".to_string(),
        ));
    }

    if let Some(description) = &params.description {
        form.push(("description".to_string(), description.clone()));
    }

    for (key, value) in &params.metadata {
        form.push((format!("metadata[{}]", key), value.clone()));
    }

    form
}

async fn parse_response(response: Response, operation: &str) -> Result<PaymentIntent> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::provider(format!("Failed to read Stripe response: {}", e)))?;

    if !status.is_success() {
        let message = provider_error_message(&body)
            .unwrap_or_else(|| format!("Stripe API error - HTTP {}", status.as_u16()));
        warn!(operation, status = status.as_u16(), message = %message, "Stripe rejected request");
        return Err(AppError::Provider(message));
    }

    let intent: PaymentIntent = serde_json::from_str(&body)
        .map_err(|e| AppError::provider(format!("Failed to parse Stripe response: {}", e)))?;

    debug!(operation, payment_intent_id = %intent.id, status = %intent.status, "Stripe call succeeded");
    Ok(intent)
}

#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

fn provider_error_message(body: &str) -> Option<String> {
    let envelope: StripeErrorEnvelope = serde_json::from_str(body).ok()?;
    envelope.error.message.or(envelope.error.kind)
}

#[async_trait]
impl PaymentGateway for StripeClient {
    async fn create_payment_intent(
        &self,
        params: CreatePaymentIntentParams,
    ) -> Result<PaymentIntent> {
        let url = format!("{}/v1/payment_intents", self.base_url);
        let request = self
            .authorize(self.client.post(&url))
            .form(&encode_create_params(&params));

        self.send(request, "create_payment_intent").await
    }

    async fn retrieve_payment_intent(&self, payment_intent_id: &str) -> Result<PaymentIntent> {
        let url = format!("{}/v1/payment_intents/{}", self.base_url, payment_intent_id);
        let request = self.authorize(self.client.get(&url));

        self.send(request, "retrieve_payment_intent").await
    }

    fn name(&self) -> &str {
        "stripe"
    }
}

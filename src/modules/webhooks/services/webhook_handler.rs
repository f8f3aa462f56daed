use super::signature::WebhookVerifier;
use crate::core::{AppError, Result};
use crate::modules::webhooks::models::{EventKind, WebhookEvent};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Signature header as seen on the incoming request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureInput<'a> {
    Present(&'a str),
    Absent,
    /// Repeated or not valid UTF-8
    Malformed,
}

/// What happened to an acknowledged webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// Signature verified and event dispatched
    Verified(EventKind),
    /// No secret configured; dispatched without verification
    Unverified(EventKind),
    /// No secret configured and the body was not an event
    Ignored,
}

/// Hook for collaborators that act on verified events (fulfilment,
/// accounting, ...). Listener failures are logged and never affect the
/// acknowledgement sent to the provider.
#[async_trait]
pub trait WebhookEventListener: Send + Sync {
    async fn on_event(&self, event: &WebhookEvent, kind: &EventKind) -> Result<()>;
}

/// Authenticates and dispatches provider webhooks
#[derive(Clone)]
pub struct WebhookHandler {
    verifier: Option<WebhookVerifier>,
    listeners: Vec<Arc<dyn WebhookEventListener>>,
}

impl WebhookHandler {
    /// Create a handler; `None` accepts every event without verification
    pub fn new(verifier: Option<WebhookVerifier>) -> Self {
        Self {
            verifier,
            listeners: Vec::new(),
        }
    }

    pub fn with_listener(mut self, listener: Arc<dyn WebhookEventListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn verification_enabled(&self) -> bool {
        self.verifier.is_some()
    }

    /// Verify (when configured), parse and dispatch a raw webhook body
    ///
    /// Any error returned here means the event was not dispatched.
    pub async fn handle(&self, payload: &[u8], signature: SignatureInput<'_>) -> Result<WebhookOutcome> {
        let Some(verifier) = &self.verifier else {
            return self.handle_unverified(payload).await;
        };

        let header = match signature {
            SignatureInput::Present(header) => header,
            SignatureInput::Absent | SignatureInput::Malformed => {
                return Err(AppError::MissingSignature)
            }
        };

        verifier.verify(payload, header)?;

        let event: WebhookEvent = serde_json::from_slice(payload)
            .map_err(|e| AppError::InvalidPayload(e.to_string()))?;

        let kind = self.dispatch(&event).await;
        Ok(WebhookOutcome::Verified(kind))
    }

    async fn handle_unverified(&self, payload: &[u8]) -> Result<WebhookOutcome> {
        let config_error = AppError::configuration("STRIPE_WEBHOOK_SECRET not set");
        warn!(
            error = %config_error,
            "Accepting webhook without signature verification; insecure outside development"
        );

        match serde_json::from_slice::<WebhookEvent>(payload) {
            Ok(event) => {
                let kind = self.dispatch(&event).await;
                Ok(WebhookOutcome::Unverified(kind))
            }
            Err(e) => {
                warn!(error = %e, "Unverified webhook body is not an event; acknowledging without dispatch");
                Ok(WebhookOutcome::Ignored)
            }
        }
    }

    async fn dispatch(&self, event: &WebhookEvent) -> EventKind {
        let kind = event.kind();

        match &kind {
            EventKind::PaymentIntentSucceeded { payment_intent_id } => {
                info!(
                    event_id = %event.id,
                    payment_intent_id = ?payment_intent_id,
                    "PaymentIntent succeeded"
                );
            }
            EventKind::PaymentIntentPaymentFailed {
                payment_intent_id,
                failure_message,
            } => {
                warn!(
                    event_id = %event.id,
                    payment_intent_id = ?payment_intent_id,
                    failure_message = ?failure_message,
                    "PaymentIntent payment failed"
                );
            }
            EventKind::Unrecognized { event_type } => {
                info!(event_id = %event.id, event_type = %event_type, "Unhandled event type");
            }
        }

        for listener in &self.listeners {
            if let Err(e) = listener.on_event(event, &kind).await {
                error!(event_id = %event.id, error = %e, "Webhook listener failed");
            }
        }

        kind
    }
}

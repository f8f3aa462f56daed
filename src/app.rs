use crate::config::StripeConfig;
use crate::core::Result;
use crate::modules::gateways::{PaymentGateway, StripeClient};
use crate::modules::payments::PaymentService;
use crate::modules::webhooks::{WebhookHandler, WebhookVerifier};
use actix_web::web;
use std::sync::Arc;

/// Shared handler dependencies, built once and cloned into every worker
#[derive(Clone)]
pub struct AppServices {
    pub payments: web::Data<PaymentService>,
    pub webhooks: web::Data<WebhookHandler>,
}

impl AppServices {
    pub fn new(gateway: Arc<dyn PaymentGateway>, webhooks: WebhookHandler) -> Self {
        Self {
            payments: web::Data::new(PaymentService::new(gateway)),
            webhooks: web::Data::new(webhooks),
        }
    }

    /// Build the Stripe-backed services from configuration
    pub fn from_config(config: &StripeConfig) -> Result<Self> {
        let gateway: Arc<dyn PaymentGateway> = Arc::new(StripeClient::new(config)?);

        let verifier = config
            .webhook_secret
            .as_ref()
            .map(|secret| WebhookVerifier::new(secret.clone(), config.webhook_tolerance_secs));

        Ok(Self::new(gateway, WebhookHandler::new(verifier)))
    }

    /// Register shared state on an app or scope
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.payments.clone())
            .app_data(self.webhooks.clone())
            .app_data(crate::middleware::json_config());
    }
}

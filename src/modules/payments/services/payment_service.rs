use crate::core::Result;
use crate::modules::gateways::PaymentGateway;
use crate::modules::payments::models::{
    ConfirmPaymentRequest, PaymentConfirmation, PaymentIntentRequest, PaymentIntentResponse,
};
use std::sync::Arc;
use tracing::info;

/// Intent creation and confirmation, delegated to the payment gateway
#[derive(Clone)]
pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Validate the amount and create a payment intent with the provider
    ///
    /// Invalid amounts fail before any provider call.
    pub async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntentResponse> {
        let params = request.into_params()?;

        info!(
            gateway = self.gateway.name(),
            amount = params.amount,
            currency = %params.currency,
            "Creating payment intent"
        );

        let intent = self.gateway.create_payment_intent(params).await?;

        info!(payment_intent_id = %intent.id, status = %intent.status, "Payment intent created");

        PaymentIntentResponse::try_from(intent)
    }

    /// Look up a payment intent and report whether it has succeeded
    pub async fn confirm_payment(
        &self,
        request: &ConfirmPaymentRequest,
    ) -> Result<PaymentConfirmation> {
        let payment_intent_id = request.validated_id()?;

        let intent = self
            .gateway
            .retrieve_payment_intent(payment_intent_id)
            .await?;

        info!(
            payment_intent_id = %intent.id,
            status = %intent.status,
            "Payment intent retrieved"
        );

        Ok(PaymentConfirmation::from(intent))
    }
}

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::payments::models::{
    ConfirmPaymentRequest, ConfirmationResponse, PaymentIntentRequest,
};
use crate::modules::payments::services::PaymentService;

/// Create a payment intent
/// POST /api/create-payment-intent
/// Returns the client secret the frontend uses to complete payment
pub async fn create_payment_intent(
    service: web::Data<PaymentService>,
    body: web::Json<PaymentIntentRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_payment_intent(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Report the provider status of a payment intent
/// POST /api/confirm-payment
pub async fn confirm_payment(
    service: web::Data<PaymentService>,
    body: web::Json<ConfirmPaymentRequest>,
) -> Result<HttpResponse, AppError> {
    let confirmation = service.confirm_payment(&body).await?;
    Ok(HttpResponse::Ok().json(ConfirmationResponse::from(confirmation)))
}

/// Configure payment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/create-payment-intent", web::post().to(create_payment_intent))
            .route("/confirm-payment", web::post().to(confirm_payment)),
    );
}

use crate::core::Result;
use crate::modules::webhooks::services::{SignatureInput, WebhookHandler, SIGNATURE_HEADER};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Acknowledgement returned to the provider
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebhookAck {
    pub received: bool,
}

/// Receive a provider webhook
///
/// POST /webhook
///
/// The body is taken as raw bytes: the signature covers the exact bytes
/// sent, so it must not be re-serialized before verification.
///
/// # Returns
/// * `200 OK` `{received: true}` - Verified (or verification disabled)
/// * `400 Bad Request` - Missing/invalid signature or invalid event
pub async fn receive_webhook(
    req: HttpRequest,
    body: web::Bytes,
    handler: web::Data<WebhookHandler>,
) -> Result<HttpResponse> {
    let signature = extract_signature(&req);

    let outcome = handler.handle(&body, signature).await?;
    info!(outcome = ?outcome, bytes = body.len(), "Webhook acknowledged");

    Ok(HttpResponse::Ok().json(WebhookAck { received: true }))
}

/// Extract the signature header, flagging repeated or non-text values
fn extract_signature(req: &HttpRequest) -> SignatureInput<'_> {
    let mut values = req.headers().get_all(SIGNATURE_HEADER);

    let Some(first) = values.next() else {
        return SignatureInput::Absent;
    };

    if values.next().is_some() {
        return SignatureInput::Malformed;
    }

    match first.to_str() {
        Ok(value) => SignatureInput::Present(value),
        Err(_) => SignatureInput::Malformed,
    }
}

/// Configure webhook routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/webhook", web::post().to(receive_webhook));
}

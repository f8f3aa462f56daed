use crate::core::AppError;
use actix_web::{error::JsonPayloadError, web, HttpRequest};

/// Map JSON extractor failures onto the application error shape
///
/// Without this, actix answers malformed bodies with a plain-text 400.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");

    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {}", e),
        other => format!("Invalid request body: {}", other),
    };

    AppError::Validation(message).into()
}

/// JSON extractor configuration used by every JSON route
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

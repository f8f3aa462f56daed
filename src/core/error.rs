use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Message returned to clients when an intent amount is rejected
pub const INVALID_AMOUNT_MESSAGE: &str = "Amount must be at least $0.50";

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Amount missing or below the provider minimum
    #[error("{}", INVALID_AMOUNT_MESSAGE)]
    InvalidAmount,

    /// Malformed client input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Webhook arrived without a usable signature header
    #[error("Missing Stripe signature header")]
    MissingSignature,

    /// Webhook signature did not verify
    #[error("Webhook signature verification failed: {0}")]
    SignatureInvalid(String),

    /// Verified webhook body is not a valid event
    #[error("Invalid webhook payload: {0}")]
    InvalidPayload(String),

    /// Payment provider errors, carrying the provider's message
    #[error("{0}")]
    Provider(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self, status = status_code.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status_code.as_u16(), "Request rejected");
        }

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidAmount => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MissingSignature => StatusCode::BAD_REQUEST,
            AppError::SignatureInvalid(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn signature_invalid(msg: impl Into<String>) -> Self {
        AppError::SignatureInvalid(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        AppError::Provider(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

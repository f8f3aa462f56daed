pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{EventKind, WebhookEvent};
pub use services::{
    SignatureInput, WebhookEventListener, WebhookHandler, WebhookOutcome, WebhookVerifier,
    SIGNATURE_HEADER,
};

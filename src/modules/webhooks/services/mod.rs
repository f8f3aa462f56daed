pub mod signature;
pub mod webhook_handler;

pub use signature::{ParsedSignature, WebhookVerifier, SIGNATURE_HEADER};
pub use webhook_handler::{SignatureInput, WebhookEventListener, WebhookHandler, WebhookOutcome};

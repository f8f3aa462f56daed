//! Payment relay between a client application and the Stripe API
//!
//! Creates payment intents, reports their status and receives signed
//! provider webhooks. The service holds no state of its own.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::gateways;
pub use modules::payments;
pub use modules::webhooks;

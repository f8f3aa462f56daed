pub mod gateways;
pub mod health;
pub mod payments;
pub mod webhooks;

use actix_web::web;

/// Register every HTTP route the relay serves
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure(cfg);
    payments::configure(cfg);
    webhooks::configure(cfg);
}

pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{
    ConfirmPaymentRequest, ConfirmationResponse, PaymentConfirmation, PaymentIntentRequest,
    PaymentIntentResponse,
};
pub use services::PaymentService;

pub mod gateway_trait;
pub mod stripe;

pub use gateway_trait::{
    CreatePaymentIntentParams, PaymentGateway, PaymentIntent, PAYMENT_INTENT_SUCCEEDED,
};
pub use stripe::StripeClient;

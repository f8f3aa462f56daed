pub mod services;

pub use services::{
    CreatePaymentIntentParams, PaymentGateway, PaymentIntent, StripeClient,
    PAYMENT_INTENT_SUCCEEDED,
};

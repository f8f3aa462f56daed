pub mod payment_intent;

pub use payment_intent::{
    ConfirmPaymentRequest, ConfirmationResponse, PaymentConfirmation, PaymentIntentRequest,
    PaymentIntentResponse, DEFAULT_CURRENCY,
};

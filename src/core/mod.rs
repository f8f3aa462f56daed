pub mod amount;
pub mod error;

pub use amount::{validate_amount, MINIMUM_AMOUNT};
pub use error::{AppError, Result};

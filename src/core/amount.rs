use super::error::{AppError, Result};

/// Smallest chargeable amount in minor units ($0.50)
pub const MINIMUM_AMOUNT: i64 = 50;

/// Exclusive upper bound: the first value an `i64` cannot hold
const AMOUNT_LIMIT: f64 = i64::MAX as f64;

/// Validates a requested charge and converts it to whole minor units
///
/// The minimum is checked against the raw value, so 49.6 is rejected even
/// though it would round to 50. Accepted values are rounded half away from
/// zero because the provider rejects fractional minor units. Values too
/// large for whole minor units are rejected rather than clamped.
pub fn validate_amount(amount: Option<f64>) -> Result<i64> {
    match amount {
        Some(value) if value >= MINIMUM_AMOUNT as f64 && value < AMOUNT_LIMIT => {
            Ok(value.round() as i64)
        }
        _ => Err(AppError::InvalidAmount),
    }
}

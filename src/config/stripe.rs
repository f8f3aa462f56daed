use super::{optional_env, parse_env};
use crate::core::{AppError, Result};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Request timeout used by the official Stripe SDKs
pub const DEFAULT_TIMEOUT_SECS: u64 = 80;

/// Signature timestamp tolerance used by the official Stripe SDKs
pub const DEFAULT_WEBHOOK_TOLERANCE_SECS: i64 = 300;

/// Payment provider configuration
#[derive(Clone)]
pub struct StripeConfig {
    pub secret_key: String,
    /// Shared webhook signing secret; `None` disables verification
    pub webhook_secret: Option<String>,
    pub api_base: String,
    pub api_version: Option<String>,
    pub timeout_secs: u64,
    pub webhook_tolerance_secs: i64,
}

impl StripeConfig {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            webhook_secret: None,
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            webhook_tolerance_secs: DEFAULT_WEBHOOK_TOLERANCE_SECS,
        }
    }

    pub fn from_env() -> Result<Self> {
        let secret_key = optional_env("STRIPE_SECRET_KEY")
            .ok_or_else(|| AppError::configuration("STRIPE_SECRET_KEY not set"))?;

        Ok(StripeConfig {
            secret_key,
            webhook_secret: optional_env("STRIPE_WEBHOOK_SECRET"),
            api_base: optional_env("STRIPE_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            api_version: optional_env("STRIPE_API_VERSION"),
            timeout_secs: parse_env("STRIPE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            webhook_tolerance_secs: parse_env(
                "STRIPE_WEBHOOK_TOLERANCE_SECS",
                DEFAULT_WEBHOOK_TOLERANCE_SECS,
            )?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(AppError::configuration(
                "STRIPE_TIMEOUT_SECS must be greater than 0",
            ));
        }

        if self.webhook_tolerance_secs <= 0 {
            return Err(AppError::configuration(
                "STRIPE_WEBHOOK_TOLERANCE_SECS must be greater than 0",
            ));
        }

        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(AppError::configuration(
                "STRIPE_API_BASE must be an http(s) URL",
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn webhook_verification_enabled(&self) -> bool {
        self.webhook_secret.is_some()
    }
}

// Keys stay out of logs
impl fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"[redacted]")
            .field(
                "webhook_secret",
                &self.webhook_secret.as_ref().map(|_| "[redacted]"),
            )
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("webhook_tolerance_secs", &self.webhook_tolerance_secs)
            .finish()
    }
}

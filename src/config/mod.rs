use crate::core::{AppError, Result};
use std::env;

pub mod server;
pub mod stripe;

pub use server::ServerConfig;
pub use stripe::StripeConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub stripe: StripeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let log_format = match env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .to_lowercase()
            .as_str()
        {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(AppError::configuration(format!(
                    "Invalid LOG_FORMAT '{}', expected 'pretty' or 'json'",
                    other
                )))
            }
        };

        Ok(AppConfig {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_format,
        })
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Config {
            app: AppConfig::from_env()?,
            server: ServerConfig::from_env()?,
            stripe: StripeConfig::from_env()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.stripe.validate()?;
        Ok(())
    }
}

/// Reads an optional numeric variable, falling back to `default` when unset
pub(crate) fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    parse_value(key, env::var(key).ok(), default)
}

/// Reads an optional string variable, treating blank values as unset
pub(crate) fn optional_env(key: &str) -> Option<String> {
    non_blank(env::var(key).ok())
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::configuration(format!("Invalid {}", key))),
        None => Ok(default),
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

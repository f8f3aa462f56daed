use super::parse_env;
use crate::core::{AppError, Result};
use actix_web::http::Uri;
use std::env;

pub const DEFAULT_PORT: u16 = 3001;

pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:5173"];

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Origins permitted to call the API with credentials
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: num_cpus::get(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_env("PORT", DEFAULT_PORT)?;

        let mut config = Self::new(host, port);
        config.workers = parse_env("SERVER_WORKERS", config.workers)?;

        if let Ok(origins) = env::var("CORS_ALLOWED_ORIGINS") {
            config.allowed_origins = parse_origins(&origins);
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::configuration("PORT must be greater than 0"));
        }

        if self.workers == 0 {
            return Err(AppError::configuration(
                "SERVER_WORKERS must be greater than 0",
            ));
        }

        if self.allowed_origins.is_empty() {
            return Err(AppError::configuration(
                "CORS_ALLOWED_ORIGINS must list at least one origin",
            ));
        }

        for origin in &self.allowed_origins {
            validate_origin(origin)?;
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Splits a comma-separated origin list, dropping blanks and trailing slashes
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

/// Credentialed CORS needs concrete `scheme://host[:port]` origins; wildcards are refused
fn validate_origin(origin: &str) -> Result<()> {
    let invalid = || {
        AppError::configuration(format!(
            "CORS_ALLOWED_ORIGINS entry '{}' is not an http(s) origin",
            origin
        ))
    };

    let uri: Uri = origin.parse().map_err(|_| invalid())?;

    match (uri.scheme_str(), uri.host()) {
        (Some("http" | "https"), Some(host)) if !host.contains('*') => {}
        _ => return Err(invalid()),
    }

    if uri.path_and_query().is_some_and(|path| path.as_str() != "/") {
        return Err(invalid());
    }

    Ok(())
}

//! Stripe webhook signature verification.
//!
//! The `Stripe-Signature` header has the form `t=<unix>,v1=<hex>[,v1=<hex>...]`.
//! Each `v1` entry is an HMAC-SHA256 of `"<t>.<raw body>"` keyed with the
//! endpoint's signing secret. Several `v1` entries appear while a secret is
//! being rolled; any one of them matching is sufficient.

use crate::core::{AppError, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the provider signature
pub const SIGNATURE_HEADER: &str = "Stripe-Signature";

/// Timestamp and candidate signatures extracted from the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSignature {
    pub timestamp: i64,
    pub signatures: Vec<Vec<u8>>,
}

impl ParsedSignature {
    /// Parses a signature header, ignoring unknown schemes such as `v0`
    pub fn parse(header: &str) -> Result<Self> {
        let mut timestamp = None;
        let mut signatures = Vec::new();

        for part in header.split(',') {
            let Some((key, value)) = part.trim().split_once('=') else {
                continue;
            };

            match key {
                "t" => {
                    timestamp = Some(value.parse::<i64>().map_err(|_| {
                        AppError::signature_invalid("timestamp is not an integer")
                    })?);
                }
                // Undecodable entries can never match, so they are skipped
                "v1" => {
                    if let Ok(bytes) = hex::decode(value) {
                        signatures.push(bytes);
                    }
                }
                _ => {}
            }
        }

        let timestamp = timestamp.ok_or_else(|| {
            AppError::signature_invalid("unable to extract timestamp from header")
        })?;

        if signatures.is_empty() {
            return Err(AppError::signature_invalid(
                "no v1 signatures found in header",
            ));
        }

        Ok(Self {
            timestamp,
            signatures,
        })
    }
}

/// Verifies webhook bodies against the shared signing secret
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: String,
    tolerance_secs: i64,
}

impl WebhookVerifier {
    pub fn new(secret: impl Into<String>, tolerance_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            tolerance_secs,
        }
    }

    /// Verify a raw body against its signature header using the current time
    pub fn verify(&self, payload: &[u8], header: &str) -> Result<()> {
        self.verify_at(payload, header, chrono::Utc::now().timestamp())
    }

    /// Verify a raw body against its signature header as of `now`
    ///
    /// The signature is checked before the timestamp so that a forged
    /// header never learns whether its timestamp was acceptable.
    pub fn verify_at(&self, payload: &[u8], header: &str, now: i64) -> Result<()> {
        let parsed = ParsedSignature::parse(header)?;
        let mac = self.mac_for(parsed.timestamp, payload)?;

        let matched = parsed
            .signatures
            .iter()
            .any(|candidate| mac.clone().verify_slice(candidate).is_ok());

        if !matched {
            return Err(AppError::signature_invalid(
                "no signatures found matching the expected signature for payload",
            ));
        }

        let tolerance = u64::try_from(self.tolerance_secs).unwrap_or(0);
        if now.abs_diff(parsed.timestamp) > tolerance {
            return Err(AppError::signature_invalid(
                "timestamp outside the tolerance zone",
            ));
        }

        Ok(())
    }

    /// Produce a header value for `payload` signed at `timestamp`
    ///
    /// Used to build test fixtures and local replays.
    pub fn sign(&self, payload: &[u8], timestamp: i64) -> Result<String> {
        let signature = self.mac_for(timestamp, payload)?.finalize().into_bytes();
        Ok(format!("t={},v1={}", timestamp, hex::encode(signature)))
    }

    fn mac_for(&self, timestamp: i64, payload: &[u8]) -> Result<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| AppError::internal(format!("Invalid webhook secret: {}", e)))?;
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        Ok(mac)
    }
}

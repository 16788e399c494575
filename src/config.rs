//! Server configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use axum::http::HeaderValue;
use thiserror::Error;

use crate::facts::DEFAULT_TIMEOUT;

/// Configuration error raised while reading environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),
    #[error("FACTS_TIMEOUT_SECS must be a positive integer, got '{0}'")]
    InvalidTimeout(String),
    #[error("CORS_ALLOW_ORIGIN is not a valid header value: '{0}'")]
    InvalidOrigin(String),
}

/// Allowed CORS origin for cross-origin GET requests.
#[derive(Debug, Clone)]
pub enum CorsOrigin {
    /// Wildcard: any origin may read responses.
    Any,
    /// A single exact origin.
    Exact(HeaderValue),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// CORS origin permitted for GET requests
    pub cors_origin: CorsOrigin,
    /// Base URL of the fact service
    pub facts_base_url: String,
    /// Per-request deadline for fact lookups
    pub facts_timeout: Duration,
}

impl ServerConfig {
    /// Load the configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0)
    /// - `PORT` (optional, default: 8080)
    /// - `CORS_ALLOW_ORIGIN` (optional, default: `*`): `*` for any origin,
    ///   otherwise a single exact origin such as `https://example.com`
    /// - `FACTS_API_URL` (optional, default: http://numbersapi.com)
    /// - `FACTS_TIMEOUT_SECS` (optional, default: 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("CORS_ALLOW_ORIGIN").ok(),
            env::var("FACTS_API_URL").ok(),
            env::var("FACTS_TIMEOUT_SECS").ok(),
        )
    }

    fn from_parts(
        host: Option<String>,
        port: Option<String>,
        cors_origin: Option<String>,
        facts_base_url: Option<String>,
        facts_timeout_secs: Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match port {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        let cors_origin = match cors_origin.as_deref() {
            None | Some("*") => CorsOrigin::Any,
            Some(origin) => CorsOrigin::Exact(
                origin
                    .parse()
                    .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))?,
            ),
        };

        let facts_base_url =
            facts_base_url.unwrap_or_else(|| "http://numbersapi.com".to_string());

        let facts_timeout = match facts_timeout_secs {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .ok()
                    .filter(|&s| s > 0)
                    .ok_or(ConfigError::InvalidTimeout(raw))?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            host,
            port,
            cors_origin,
            facts_base_url,
            facts_timeout,
        })
    }
}

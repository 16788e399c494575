//! Fact-provider boundary.
//!
//! The classifier never talks to the network itself; it composes with a
//! [`FactProvider`] that returns a short text fact for a number. The
//! production implementation queries the Numbers API with a bounded timeout
//! and converts every failure into a fixed fallback string, so lookups can
//! never fail or block a response beyond the deadline.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

/// Fallback when the fact service cannot be reached (timeout, connect error).
pub const FALLBACK_UNREACHABLE: &str = "No fun fact found.";
/// Fallback when the service responds but without a usable fact.
pub const FALLBACK_UNAVAILABLE: &str = "No fun fact available.";

/// Default per-request deadline for fact lookups.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of short text facts about numbers.
///
/// Implementations must always return non-empty text within a bounded
/// deadline; failures are absorbed internally, never propagated.
#[async_trait]
pub trait FactProvider: Send + Sync {
    async fn fun_fact(&self, number: i64) -> String;
}

/// Numbers API response body (`GET /{number}?json`).
#[derive(Debug, Deserialize)]
struct FactBody {
    text: Option<String>,
}

/// [`FactProvider`] backed by the Numbers API (<http://numbersapi.com>).
pub struct NumbersApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl NumbersApiClient {
    /// Create a client for the given base URL with a per-request timeout.
    ///
    /// A trailing slash on `base_url` is tolerated.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl FactProvider for NumbersApiClient {
    async fn fun_fact(&self, number: i64) -> String {
        let url = format!("{}/{}?json&math=true", self.base_url, number);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(number, error = %e, "fact lookup failed");
                return FALLBACK_UNREACHABLE.to_string();
            }
        };

        if !response.status().is_success() {
            tracing::warn!(number, status = %response.status(), "fact lookup returned non-success");
            return FALLBACK_UNAVAILABLE.to_string();
        }

        match response.json::<FactBody>().await {
            Ok(FactBody { text: Some(text) }) if !text.is_empty() => text,
            _ => FALLBACK_UNAVAILABLE.to_string(),
        }
    }
}

/// In-process [`FactProvider`] returning a fixed fact.
///
/// Used by tests and for running the service without network access.
pub struct StaticFactProvider {
    fact: String,
}

impl StaticFactProvider {
    pub fn new(fact: impl Into<String>) -> Self {
        Self { fact: fact.into() }
    }
}

impl Default for StaticFactProvider {
    fn default() -> Self {
        Self::new(FALLBACK_UNAVAILABLE)
    }
}

#[async_trait]
impl FactProvider for StaticFactProvider {
    async fn fun_fact(&self, _number: i64) -> String {
        self.fact.clone()
    }
}

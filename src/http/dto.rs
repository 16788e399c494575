//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::classifier::{Classification, Property};

/// Query parameters for the classify endpoint.
///
/// The value is taken as a raw string so a non-integer input can be echoed
/// back verbatim in the 400 response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassifyQuery {
    #[serde(default)]
    pub number: Option<String>,
}

/// Response body for a successfully classified number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResponse {
    /// The parsed input number
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    /// Ordered tags: "armstrong" (when applicable), then "odd" or "even"
    pub properties: Vec<Property>,
    pub digit_sum: u32,
    /// Always present; a fixed fallback string when the lookup failed
    pub fun_fact: String,
}

impl ClassificationResponse {
    pub fn new(classification: Classification, fun_fact: String) -> Self {
        Self {
            number: classification.number,
            is_prime: classification.is_prime,
            is_perfect: classification.is_perfect,
            properties: classification.properties,
            digit_sum: classification.digit_sum,
            fun_fact,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

//! # Number Classification Service
//!
//! HTTP service that classifies an integer by its mathematical properties.
//! Given a number, the API reports whether it is prime, perfect, and/or an
//! Armstrong number, along with its digit sum, parity, and a short "fun fact"
//! fetched from the Numbers API.
//!
//! ## Architecture
//!
//! - [`classifier`]: pure, deterministic number predicates and `classify()`
//! - [`facts`]: fact-provider boundary (Numbers API client with timeout and
//!   fallback, plus an offline implementation)
//! - [`config`]: environment-driven server configuration
//! - [`http`]: Axum-based HTTP server, router, and request handlers
//!
//! The classifier never fails for any `i64` input; the only request-level
//! error is a query value that does not parse as an integer. Fact-provider
//! failures are absorbed at the boundary and converted to a fallback string,
//! never surfaced to the caller.

pub mod classifier;
pub mod config;
pub mod facts;
pub mod http;

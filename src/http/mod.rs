//! HTTP server module.
//!
//! Axum-based boundary in front of the pure classifier. Handlers parse the
//! query value, run the classifier, query the fact provider, and serialize
//! the combined result; the only request-level error is a value that does
//! not parse as an integer.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

//! Application state for the HTTP server.

use std::sync::Arc;

use crate::facts::FactProvider;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Fact provider queried for each classified number
    pub facts: Arc<dyn FactProvider>,
}

impl AppState {
    /// Create a new application state with the given fact provider.
    pub fn new(facts: Arc<dyn FactProvider>) -> Self {
        Self { facts }
    }
}

//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{http::Method, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::config::CorsOrigin;

/// Create the main application router with all routes and middleware.
///
/// Cross-origin access is GET-only, restricted to `cors_origin`.
pub fn create_router(state: AppState, cors_origin: CorsOrigin) -> Router {
    let cors = match cors_origin {
        CorsOrigin::Any => CorsLayer::new().allow_origin(Any),
        CorsOrigin::Exact(origin) => CorsLayer::new().allow_origin(origin),
    }
    .allow_methods([Method::GET])
    .allow_headers(Any);

    let api = Router::new().route("/classify-number", get(handlers::classify_number));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::StaticFactProvider;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(Arc::new(StaticFactProvider::default()));
        let _router = create_router(state, CorsOrigin::Any);
        // If we got here, router was created successfully
    }

    #[test]
    fn test_router_creation_with_exact_origin() {
        let state = AppState::new(Arc::new(StaticFactProvider::default()));
        let origin = "https://example.com".parse().unwrap();
        let _router = create_router(state, CorsOrigin::Exact(origin));
    }
}

//! Number Classification HTTP Server Binary
//!
//! Entry point for the number-classification REST API. It builds the fact
//! provider, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin numclass-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CORS_ALLOW_ORIGIN`: Allowed CORS origin (default: *)
//! - `FACTS_API_URL`: Fact service base URL (default: http://numbersapi.com)
//! - `FACTS_TIMEOUT_SECS`: Fact lookup deadline in seconds (default: 5)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use numclass::config::ServerConfig;
use numclass::facts::NumbersApiClient;
use numclass::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting number classification server");

    let config = ServerConfig::from_env()?;

    let facts = NumbersApiClient::new(config.facts_base_url.clone(), config.facts_timeout)?;
    let state = AppState::new(Arc::new(facts));

    let app = create_router(state, config.cors_origin.clone());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);
    info!("Classify endpoint: http://{}/api/classify-number?number=153", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

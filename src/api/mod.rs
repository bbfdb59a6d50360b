//! HTTP API server.
//!
//! Deserializes requests, invokes the store, and serializes responses
//! with fixed status codes. The MCP service is mounted on the same
//! listener under `/mcp`.

mod handlers;
pub mod read_only;
mod routes;
mod state;

#[cfg(test)]
mod read_only_test;

use std::net::IpAddr;

use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use rmcp::transport::streamable_http_server::StreamableHttpService;
use tower_http::trace::TraceLayer;

use crate::mcp::McpServer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;
use crate::store::Store;

pub use routes::create_router;
pub use state::AppState;

/// API server configuration
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".parse().unwrap(),
            port: 8000,
        }
    }
}

/// API server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Server error: {0}")]
    #[diagnostic(code(docket::api::io))]
    Io(#[from] std::io::Error),
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docket=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server with the given configuration.
///
/// The concrete store is injected by the caller; the API layer stays
/// agnostic of the backend.
pub async fn run<S: Store + 'static>(
    config: Config,
    store: S,
    settings: Settings,
) -> Result<(), ApiError> {
    init_tracing();

    let state = AppState::new(store, settings.clone());
    let ct = CancellationToken::new();
    let mcp_service: StreamableHttpService<McpServer<S>, _> =
        crate::mcp::create_mcp_service(state.store_arc(), settings, ct.clone());

    let app = routes::create_router(state)
        .nest_service("/mcp", mcp_service)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    ct.cancel();
    Ok(())
}

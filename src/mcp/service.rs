//! MCP Streamable HTTP service creation
//!
//! This module provides the function to create the MCP service that can
//! be nested into an axum router.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::config::Settings;
use crate::store::Store;

use super::server::McpServer;

/// Create the MCP Streamable HTTP service.
///
/// The returned service implements `tower::Service` and is mounted with
/// `Router::nest_service` (the API server mounts it at `/mcp`).
pub fn create_mcp_service<S: Store + 'static>(
    store: impl Into<Arc<S>>,
    settings: Settings,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<S>, LocalSessionManager> {
    let store = store.into();

    // Service factory: creates a new McpServer instance per session.
    // Returns io::Error to match rmcp's expected signature.
    let service_factory = move || -> Result<McpServer<S>, std::io::Error> {
        Ok(McpServer::new(Arc::clone(&store), settings.clone()))
    };

    let mut config = StreamableHttpServerConfig::default();
    config.sse_keep_alive = None; // Use default (15s)
    config.sse_retry = None;      // Use default retry behavior
    config.stateful_mode = true;  // Enable session management
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

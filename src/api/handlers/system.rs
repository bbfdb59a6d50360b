//! System health and status handlers.

use axum::Json;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

/// Service index response
#[derive(Serialize, ToSchema)]
pub struct RootResponse {
    /// Welcome message
    #[schema(example = "Welcome to docket")]
    pub message: String,
    /// OpenAPI documentation path
    #[schema(example = "/docs")]
    pub docs: String,
    /// MCP server mount path
    #[schema(example = "/mcp")]
    pub mcp: String,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "ok")]
    pub status: String,
}

/// Service index
///
/// Points at the documentation and the MCP mount
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Service index", body = RootResponse)
    )
)]
#[instrument]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to docket".to_string(),
        docs: "/docs".to_string(),
        mcp: "/mcp".to_string(),
    })
}

/// Health check endpoint
///
/// Returns the current health status of the API
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse)
    )
)]
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

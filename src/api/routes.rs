//! API route configuration.

use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, patch, post, put};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CommentResponse, CreateCommentRequest, CreateRecordRequest, DeleteRecordResponse,
    ErrorResponse, HealthResponse, RecordResponse, RootResponse, UpdateRecordRequest,
};
use super::read_only;
use super::state::AppState;
use crate::store::Store;

/// Build routes with generic store type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Store trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($S:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$S>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "docket API",
        version = "0.1.0",
        description = "Sample record/comment API with an MCP tool layer",
        license(name = "MIT")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_records,
        handlers::get_record,
        handlers::create_record,
        handlers::update_record,
        handlers::delete_record,
        handlers::add_comment,
        handlers::list_comments,
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            RecordResponse,
            CreateRecordRequest,
            UpdateRecordRequest,
            DeleteRecordResponse,
            CommentResponse,
            CreateCommentRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "resources", description = "Record management endpoints"),
        (name = "comments", description = "Comment sub-resource endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation.
///
/// The read-only gate and CORS are layered here so every route is
/// covered uniformly; the MCP mount carries its own gate check.
pub fn create_router<S: Store + 'static>(state: AppState<S>) -> Router {
    let api = ApiDoc::openapi();
    let settings = state.settings().clone();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    // Record routes (generic over Store)
    let record_routes = routes!(S => {
        get "/resources" => handlers::list_records,
        get "/resources/{id}" => handlers::get_record,
        post "/resources" => handlers::create_record,
        put "/resources/{id}" => handlers::update_record,
        patch "/resources/{id}" => handlers::update_record,
        delete "/resources/{id}" => handlers::delete_record,
    });

    // Comment sub-resource routes (generic over Store)
    let comment_routes = routes!(S => {
        post "/resources/{id}/comments" => handlers::add_comment,
        get "/resources/{id}/comments" => handlers::list_comments,
    });

    system_routes
        .merge(record_routes)
        .merge(comment_routes)
        .merge(Scalar::with_url("/docs", api))
        .layer(middleware::from_fn_with_state(settings, read_only::gate))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

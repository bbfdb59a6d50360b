//! Read-only mode gate.
//!
//! A cross-cutting request-classification gate: while read-only mode is
//! active, every request in the mutating class is rejected with a fixed
//! 403 before it reaches a handler, regardless of target resource or
//! payload validity. Read requests are never affected.

use axum::{
    Json,
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::Settings;

use super::handlers::ErrorResponse;

/// Static body returned for every gated request.
pub const READ_ONLY_MESSAGE: &str =
    "Application is in read-only mode. Write operations are disabled.";

/// Whether a method belongs to the mutating class (create, replace,
/// remove, or partially update a resource).
fn is_mutating(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

/// Middleware rejecting mutating requests while read-only mode is
/// active. Runs ahead of the handlers, so the gate wins over existence
/// checks.
pub async fn gate(State(settings): State<Settings>, request: Request, next: Next) -> Response {
    if settings.read_only && is_mutating(request.method()) {
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                detail: READ_ONLY_MESSAGE.to_string(),
            }),
        )
            .into_response();
    }
    next.run(request).await
}

//! Comment sub-resource handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::store::{Comment, RecordId, Store};

use super::ErrorResponse;
use super::records::store_error_response;

// =============================================================================
// DTOs
// =============================================================================

/// Comment response DTO
#[derive(Serialize, ToSchema)]
pub struct CommentResponse {
    /// Identifier, unique only within the parent record's comment list
    #[schema(example = 1)]
    pub id: u64,
    /// Comment text
    #[schema(example = "hello")]
    pub content: String,
    /// RFC 3339 creation timestamp
    #[schema(example = "2025-01-01T00:00:00+00:00")]
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            content: c.content,
            created_at: c.created_at,
        }
    }
}

/// Create comment request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    /// Comment text
    #[schema(example = "hello")]
    pub content: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Add a comment to a record
///
/// The parent must exist; comment ids start at 1 per record
#[utoipa::path(
    post,
    path = "/resources/{id}/comments",
    tag = "comments",
    params(
        ("id" = u64, Path, description = "Parent record id")
    ),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 404, description = "Parent record not found", body = ErrorResponse),
        (status = 403, description = "Read-only mode is active", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn add_comment<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<RecordId>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), (StatusCode, Json<ErrorResponse>)> {
    let comment = state
        .store()
        .comments()
        .add(id, req.content)
        .map_err(store_error_response)?;

    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

/// List the comments of a record
///
/// Empty array when the record exists but has no comments yet
#[utoipa::path(
    get,
    path = "/resources/{id}/comments",
    tag = "comments",
    params(
        ("id" = u64, Path, description = "Parent record id")
    ),
    responses(
        (status = 200, description = "Comments in insertion order", body = Vec<CommentResponse>),
        (status = 404, description = "Parent record not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_comments<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<RecordId>,
) -> Result<Json<Vec<CommentResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let comments = state
        .store()
        .comments()
        .list_for(id)
        .map_err(store_error_response)?;

    Ok(Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}

//! Record management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::store::{Record, RecordId, RecordPatch, Store, StoreError};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Record response DTO
#[derive(Serialize, ToSchema)]
pub struct RecordResponse {
    /// Unique identifier
    #[schema(example = 1)]
    pub id: u64,
    /// Record name
    #[schema(example = "Example 1")]
    pub name: String,
    /// Description text
    #[schema(example = "This is example 1")]
    pub description: String,
}

impl From<Record> for RecordResponse {
    fn from(r: Record) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
        }
    }
}

/// Create record request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRecordRequest {
    /// Record name
    #[schema(example = "Example 4")]
    pub name: String,
    /// Optional description; a placeholder naming the record is
    /// substituted when omitted
    #[schema(example = "This is Example 4")]
    pub description: Option<String>,
}

/// Update record request DTO. Omitted fields keep their stored value;
/// an explicit empty string counts as provided.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateRecordRequest {
    #[schema(example = "Renamed")]
    pub name: Option<String>,
    #[schema(example = "Updated description")]
    pub description: Option<String>,
}

/// Delete response envelope
#[derive(Serialize, ToSchema)]
pub struct DeleteRecordResponse {
    #[schema(example = "Record 1 deleted")]
    pub message: String,
    /// The removed record
    pub deleted: RecordResponse,
}

/// Error response DTO
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Record 999 not found")]
    pub detail: String,
}

/// Map a store error onto the wire contract.
pub(crate) fn store_error_response(e: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    match e {
        StoreError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                detail: e.to_string(),
            }),
        ),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all records
///
/// Returns all records in insertion order
#[utoipa::path(
    get,
    path = "/resources",
    tag = "resources",
    responses(
        (status = 200, description = "List of records", body = Vec<RecordResponse>)
    )
)]
#[instrument(skip(state))]
pub async fn list_records<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<RecordResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let records = state
        .store()
        .records()
        .list()
        .map_err(store_error_response)?;

    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}

/// Get a record by id
#[utoipa::path(
    get,
    path = "/resources/{id}",
    tag = "resources",
    params(
        ("id" = u64, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Record found", body = RecordResponse),
        (status = 404, description = "Record not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_record<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<RecordId>,
) -> Result<Json<RecordResponse>, (StatusCode, Json<ErrorResponse>)> {
    let record = state
        .store()
        .records()
        .get(id)
        .map_err(store_error_response)?;

    Ok(Json(RecordResponse::from(record)))
}

/// Create a new record
///
/// Assigns the next id and returns the created record
#[utoipa::path(
    post,
    path = "/resources",
    tag = "resources",
    request_body = CreateRecordRequest,
    responses(
        (status = 201, description = "Record created", body = RecordResponse),
        (status = 403, description = "Read-only mode is active", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_record<S: Store>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), (StatusCode, Json<ErrorResponse>)> {
    let record = state
        .store()
        .records()
        .create(req.name, req.description)
        .map_err(store_error_response)?;

    Ok((StatusCode::CREATED, Json(RecordResponse::from(record))))
}

/// Update a record
///
/// Partial merge: only provided fields overwrite the stored values
#[utoipa::path(
    put,
    path = "/resources/{id}",
    tag = "resources",
    params(
        ("id" = u64, Path, description = "Record id")
    ),
    request_body = UpdateRecordRequest,
    responses(
        (status = 200, description = "Record updated", body = RecordResponse),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 403, description = "Read-only mode is active", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_record<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<RecordId>,
    Json(req): Json<UpdateRecordRequest>,
) -> Result<Json<RecordResponse>, (StatusCode, Json<ErrorResponse>)> {
    let patch = RecordPatch {
        name: req.name,
        description: req.description,
    };

    let record = state
        .store()
        .records()
        .update(id, patch)
        .map_err(store_error_response)?;

    Ok(Json(RecordResponse::from(record)))
}

/// Delete a record
///
/// Removes the record and returns it in the response envelope
#[utoipa::path(
    delete,
    path = "/resources/{id}",
    tag = "resources",
    params(
        ("id" = u64, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Record deleted", body = DeleteRecordResponse),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 403, description = "Read-only mode is active", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_record<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<RecordId>,
) -> Result<Json<DeleteRecordResponse>, (StatusCode, Json<ErrorResponse>)> {
    let removed = state
        .store()
        .records()
        .delete(id)
        .map_err(store_error_response)?;

    Ok(Json(DeleteRecordResponse {
        message: format!("Record {} deleted", id),
        deleted: RecordResponse::from(removed),
    }))
}

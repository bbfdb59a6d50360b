//! Store error types.
//!
//! Backend-agnostic errors raised by the storage layer. Uses miette for
//! diagnostic output and thiserror for derive macros.

use miette::Diagnostic;
use thiserror::Error;

/// Store operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum StoreError {
    #[error("{entity_type} {id} not found")]
    #[diagnostic(code(docket::store::not_found))]
    NotFound { entity_type: String, id: u64 },
}

impl StoreError {
    /// Not-found error for a record id.
    pub fn record_not_found(id: u64) -> Self {
        StoreError::NotFound {
            entity_type: "Record".to_string(),
            id,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the boundary layers.

use crate::store::{
    StoreResult,
    models::{Comment, Record, RecordId, RecordPatch},
};

/// Repository for Record operations.
pub trait RecordRepository {
    /// Get all records, in insertion order.
    fn list(&self) -> StoreResult<Vec<Record>>;

    /// Get a record by id.
    fn get(&self, id: RecordId) -> StoreResult<Record>;

    /// Create a new record.
    ///
    /// The id is one greater than the current maximum (1 for an empty
    /// store). A missing description is substituted with a generated
    /// placeholder.
    fn create(&self, name: String, description: Option<String>) -> StoreResult<Record>;

    /// Partially update a record. Omitted patch fields keep their
    /// stored value.
    fn update(&self, id: RecordId, patch: RecordPatch) -> StoreResult<Record>;

    /// Delete a record by id, returning the removed value.
    fn delete(&self, id: RecordId) -> StoreResult<Record>;
}

/// Repository for Comment operations.
pub trait CommentRepository {
    /// Append a comment under an existing record.
    fn add(&self, record_id: RecordId, content: String) -> StoreResult<Comment>;

    /// Get all comments under an existing record, in insertion order.
    /// Empty if the record exists but has no comments yet.
    fn list_for(&self, record_id: RecordId) -> StoreResult<Vec<Comment>>;
}

/// Combined store interface.
pub trait Store: Send + Sync {
    /// Get the record repository.
    fn records(&self) -> &dyn RecordRepository;

    /// Get the comment repository.
    fn comments(&self) -> &dyn CommentRepository;
}

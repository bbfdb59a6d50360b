//! Domain models for the record store.
//!
//! These models are backend-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

/// Record identifier. Assigned as one greater than the current maximum;
/// never reclaimed, never reused except through that rule.
pub type RecordId = u64;

/// The primary resource entity tracked by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub description: String,
}

/// A comment scoped to exactly one record.
///
/// Comment ids are unique only within the parent's list, never globally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub content: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Partial update for a record.
///
/// `Some` overwrites the stored value, `None` leaves it untouched.
/// `Some("")` counts as provided and overwrites with the empty string.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl RecordPatch {
    pub fn merge_into(self, target: &mut Record) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
    }
}

//! In-memory implementation of the store traits.
//!
//! Records and comments live in process memory for the lifetime of the
//! process; there is no persistence.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{
    Comment, CommentRepository, Record, RecordId, RecordPatch, RecordRepository, Store,
    StoreError, StoreResult,
};

/// Process-local store backed by a single `RwLock`.
///
/// Every mutation holds the write lock for its whole scan-and-mutate
/// span, so max+1 id assignment cannot race between concurrent creates.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    records: Vec<Record>,
    /// Comment lists keyed by parent record id. Kept separate from the
    /// record list; deleting a record leaves its list behind.
    comments: HashMap<RecordId, Vec<Comment>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Create a store seeded with the three sample records the demo
    /// server ships with.
    pub fn with_samples() -> Self {
        let store = Self::new();
        {
            let mut inner = store.write();
            for i in 1..=3u64 {
                inner.records.push(Record {
                    id: i,
                    name: format!("Example {i}"),
                    description: format!("This is example {i}"),
                });
            }
        }
        store
    }

    // A poisoned lock still holds consistent data; recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Placeholder description substituted when a create request omits one.
fn default_description(name: &str) -> String {
    format!("This is {name}")
}

impl RecordRepository for MemoryStore {
    fn list(&self) -> StoreResult<Vec<Record>> {
        Ok(self.read().records.clone())
    }

    fn get(&self, id: RecordId) -> StoreResult<Record> {
        self.read()
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::record_not_found(id))
    }

    fn create(&self, name: String, description: Option<String>) -> StoreResult<Record> {
        let mut inner = self.write();
        let id = inner.records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let record = Record {
            id,
            description: description.unwrap_or_else(|| default_description(&name)),
            name,
        };
        inner.records.push(record.clone());
        Ok(record)
    }

    fn update(&self, id: RecordId, patch: RecordPatch) -> StoreResult<Record> {
        let mut inner = self.write();
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::record_not_found(id))?;
        patch.merge_into(record);
        Ok(record.clone())
    }

    fn delete(&self, id: RecordId) -> StoreResult<Record> {
        let mut inner = self.write();
        let pos = inner
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::record_not_found(id))?;
        // The comment list under this id is orphaned, not cleared.
        Ok(inner.records.remove(pos))
    }
}

impl CommentRepository for MemoryStore {
    fn add(&self, record_id: RecordId, content: String) -> StoreResult<Comment> {
        let mut inner = self.write();
        if !inner.records.iter().any(|r| r.id == record_id) {
            return Err(StoreError::record_not_found(record_id));
        }
        let list = inner.comments.entry(record_id).or_default();
        let comment = Comment {
            id: list.len() as u64 + 1,
            content,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        list.push(comment.clone());
        Ok(comment)
    }

    fn list_for(&self, record_id: RecordId) -> StoreResult<Vec<Comment>> {
        let inner = self.read();
        if !inner.records.iter().any(|r| r.id == record_id) {
            return Err(StoreError::record_not_found(record_id));
        }
        Ok(inner.comments.get(&record_id).cloned().unwrap_or_default())
    }
}

impl Store for MemoryStore {
    fn records(&self) -> &dyn RecordRepository {
        self
    }

    fn comments(&self) -> &dyn CommentRepository {
        self
    }
}

//! Tests for store error types.

use crate::store::{StoreError, StoreResult};

#[test]
fn not_found_error_displays_correctly() {
    let err = StoreError::NotFound {
        entity_type: "Record".to_string(),
        id: 42,
    };
    assert_eq!(err.to_string(), "Record 42 not found");
}

#[test]
fn record_not_found_helper_sets_entity_type() {
    let err = StoreError::record_not_found(7);
    assert_eq!(err.to_string(), "Record 7 not found");
}

#[test]
fn store_result_err_returns_error() {
    let result: StoreResult<i32> = Err(StoreError::record_not_found(1));
    assert!(result.is_err());
}

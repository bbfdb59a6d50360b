//! Tests for domain models.

use crate::store::models::*;

#[test]
fn record_serializes_to_flat_json() {
    let record = Record {
        id: 1,
        name: "Example 1".to_string(),
        description: "This is example 1".to_string(),
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 1,
            "name": "Example 1",
            "description": "This is example 1"
        })
    );
}

#[test]
fn patch_with_no_fields_is_a_no_op() {
    let mut record = Record {
        id: 1,
        name: "name".to_string(),
        description: "desc".to_string(),
    };
    RecordPatch::default().merge_into(&mut record);
    assert_eq!(record.name, "name");
    assert_eq!(record.description, "desc");
}

#[test]
fn patch_distinguishes_empty_from_absent() {
    let mut record = Record {
        id: 1,
        name: "name".to_string(),
        description: "desc".to_string(),
    };
    RecordPatch {
        name: Some(String::new()),
        description: None,
    }
    .merge_into(&mut record);
    assert_eq!(record.name, "");
    assert_eq!(record.description, "desc");
}

#[test]
fn comment_roundtrips_through_json() {
    let comment = Comment {
        id: 2,
        content: "hello".to_string(),
        created_at: "2025-01-01T00:00:00+00:00".to_string(),
    };
    let json = serde_json::to_string(&comment).unwrap();
    let back: Comment = serde_json::from_str(&json).unwrap();
    assert_eq!(comment, back);
}

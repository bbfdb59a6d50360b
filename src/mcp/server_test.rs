//! Tests for the MCP server and its tools.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;

use crate::config::Settings;
use crate::mcp::tools::{
    AddCommentParams, CreateRecordParams, DeleteRecordParams, GetRecordParams, ListCommentsParams,
    UpdateRecordParams,
};
use crate::store::{MemoryStore, RecordRepository, Store};

use super::server::McpServer;

/// Server over the seeded sample store, plus a handle on the store
fn test_server() -> (McpServer<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_samples());
    let server = McpServer::new(Arc::clone(&store), Settings::default());
    (server, store)
}

#[tokio::test]
async fn server_info_advertises_tools() {
    use rmcp::ServerHandler;

    let (server, _) = test_server();
    let info = server.get_info();

    assert!(
        info.capabilities.tools.is_some(),
        "Server should support tools"
    );
    assert!(
        info.instructions.is_some(),
        "Server should provide instructions"
    );
}

#[tokio::test]
async fn list_records_tool_succeeds() {
    let (server, _) = test_server();
    let result = server.list_records().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn get_record_tool_fails_for_missing_id() {
    let (server, _) = test_server();
    let result = server
        .get_record(Parameters(GetRecordParams { record_id: 999 }))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn create_record_tool_appends_to_the_store() {
    let (server, store) = test_server();

    let result = server
        .create_record(Parameters(CreateRecordParams {
            name: "Example 4".to_string(),
            description: None,
        }))
        .await;
    assert!(result.is_ok());

    let record = store.records().get(4).unwrap();
    assert_eq!(record.name, "Example 4");
    assert_eq!(record.description, "This is Example 4");
}

#[tokio::test]
async fn update_record_tool_merges_partially() {
    let (server, store) = test_server();

    server
        .update_record(Parameters(UpdateRecordParams {
            record_id: 2,
            name: None,
            description: Some("new".to_string()),
        }))
        .await
        .unwrap();

    let record = store.records().get(2).unwrap();
    assert_eq!(record.name, "Example 2");
    assert_eq!(record.description, "new");
}

#[tokio::test]
async fn comment_tools_roundtrip() {
    let (server, _) = test_server();

    server
        .add_comment(Parameters(AddCommentParams {
            record_id: 1,
            content: "hello".to_string(),
        }))
        .await
        .unwrap();

    let result = server
        .list_comments(Parameters(ListCommentsParams { record_id: 1 }))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn mutating_tools_are_rejected_in_read_only_mode() {
    let store = Arc::new(MemoryStore::with_samples());
    let server = McpServer::new(Arc::clone(&store), Settings { read_only: true });

    assert!(
        server
            .create_record(Parameters(CreateRecordParams {
                name: "blocked".to_string(),
                description: None,
            }))
            .await
            .is_err()
    );
    assert!(
        server
            .delete_record(Parameters(DeleteRecordParams { record_id: 1 }))
            .await
            .is_err()
    );
    // The gate wins over existence checks: the target id does not exist.
    assert!(
        server
            .delete_record(Parameters(DeleteRecordParams { record_id: 999 }))
            .await
            .is_err()
    );
    assert!(
        server
            .add_comment(Parameters(AddCommentParams {
                record_id: 1,
                content: "blocked".to_string(),
            }))
            .await
            .is_err()
    );

    // Reads still pass, and the store is untouched.
    assert!(server.list_records().await.is_ok());
    assert_eq!(store.records().list().unwrap().len(), 3);
}

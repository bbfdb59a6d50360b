//! MCP server implementation
//!
//! The server exposes one tool per API operation. Mutating tools check
//! the read-only gate before touching the store; read tools never do.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde_json::json;

use crate::api::read_only::READ_ONLY_MESSAGE;
use crate::config::Settings;
use crate::store::{RecordPatch, Store, StoreError};

use super::tools::{
    AddCommentParams, CreateRecordParams, DeleteRecordParams, GetRecordParams, ListCommentsParams,
    UpdateRecordParams,
};

/// MCP server exposing the record and comment operations as tools.
///
/// Generic over `S: Store` for zero-cost abstraction (no dynamic
/// dispatch). The store and settings are injected via the constructor.
pub struct McpServer<S: Store> {
    store: Arc<S>,
    settings: Settings,
    tool_router: ToolRouter<Self>,
}

// Manual Clone impl - we only need the Arc to be cloneable, not S.
impl<S: Store> Clone for McpServer<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            settings: self.settings.clone(),
            tool_router: self.tool_router.clone(),
        }
    }
}

fn store_error(e: StoreError) -> McpError {
    match e {
        StoreError::NotFound { .. } => McpError::resource_not_found(
            "record_not_found",
            Some(json!({"error": e.to_string()})),
        ),
    }
}

#[tool_router]
impl<S: Store + 'static> McpServer<S> {
    /// Create a new MCP server over the given store and settings.
    pub fn new(store: Arc<S>, settings: Settings) -> Self {
        Self {
            store,
            settings,
            tool_router: Self::tool_router(),
        }
    }

    /// Fail with the fixed read-only rejection while the gate is
    /// active. Called by every mutating tool before any store access.
    fn check_writable(&self) -> Result<(), McpError> {
        if self.settings.read_only {
            return Err(McpError::invalid_request(
                "read_only_mode",
                Some(json!({"error": READ_ONLY_MESSAGE})),
            ));
        }
        Ok(())
    }

    #[tool(description = "List all records in insertion order")]
    pub async fn list_records(&self) -> Result<CallToolResult, McpError> {
        let records = self.store.records().list().map_err(store_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&records).unwrap(),
        )]))
    }

    #[tool(description = "Get a record by id")]
    pub async fn get_record(
        &self,
        Parameters(params): Parameters<GetRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        let record = self.store.records().get(params.record_id).map_err(store_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&record).unwrap(),
        )]))
    }

    #[tool(
        description = "Create a new record. The id is assigned automatically; a missing description gets a generated placeholder."
    )]
    pub async fn create_record(
        &self,
        Parameters(params): Parameters<CreateRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_writable()?;

        let record = self
            .store
            .records()
            .create(params.name, params.description)
            .map_err(store_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&record).unwrap(),
        )]))
    }

    #[tool(
        description = "Update a record. Partial merge: only provided fields overwrite the stored values."
    )]
    pub async fn update_record(
        &self,
        Parameters(params): Parameters<UpdateRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_writable()?;

        let patch = RecordPatch {
            name: params.name,
            description: params.description,
        };
        let record = self
            .store
            .records()
            .update(params.record_id, patch)
            .map_err(store_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&record).unwrap(),
        )]))
    }

    #[tool(description = "Delete a record by id, returning the removed value")]
    pub async fn delete_record(
        &self,
        Parameters(params): Parameters<DeleteRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_writable()?;

        let removed = self
            .store
            .records()
            .delete(params.record_id)
            .map_err(store_error)?;

        let response = json!({
            "message": format!("Record {} deleted", removed.id),
            "deleted": removed,
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).unwrap(),
        )]))
    }

    #[tool(description = "Add a comment to a record. Comment ids start at 1 per record.")]
    pub async fn add_comment(
        &self,
        Parameters(params): Parameters<AddCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_writable()?;

        let comment = self
            .store
            .comments()
            .add(params.record_id, params.content)
            .map_err(store_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&comment).unwrap(),
        )]))
    }

    #[tool(
        description = "List the comments of a record in insertion order. Empty when the record has no comments yet."
    )]
    pub async fn list_comments(
        &self,
        Parameters(params): Parameters<ListCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let comments = self
            .store
            .comments()
            .list_for(params.record_id)
            .map_err(store_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&comments).unwrap(),
        )]))
    }
}

#[tool_handler]
impl<S: Store + 'static> ServerHandler for McpServer<S> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_instructions("docket MCP server - manage records and their comments")
    }
}

//! Tool parameter types for the MCP server.
//!
//! One struct per tool taking arguments; field descriptions become the
//! tool input schema shown to MCP clients.

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetRecordParams {
    #[schemars(description = "Record id")]
    pub record_id: u64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateRecordParams {
    #[schemars(description = "Record name")]
    pub name: String,
    #[schemars(
        description = "Optional description. A placeholder naming the record is substituted when omitted."
    )]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateRecordParams {
    #[schemars(description = "Record id to update")]
    pub record_id: u64,
    #[schemars(description = "New name (optional). Omitted fields keep their stored value.")]
    pub name: Option<String>,
    #[schemars(
        description = "New description (optional). An explicit empty string counts as provided."
    )]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteRecordParams {
    #[schemars(description = "Record id to delete")]
    pub record_id: u64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddCommentParams {
    #[schemars(description = "Parent record id")]
    pub record_id: u64,
    #[schemars(description = "Comment text")]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListCommentsParams {
    #[schemars(description = "Parent record id")]
    pub record_id: u64,
}

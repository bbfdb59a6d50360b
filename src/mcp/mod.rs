//! Model Context Protocol (MCP) server implementation
//!
//! This module provides an MCP server using the Streamable HTTP transport.
//! The server mirrors the REST surface, exposing the record and comment
//! operations as tools.
//!
//! # Architecture
//!
//! - `server`: the server coordinator and its tool implementations
//! - `tools`: tool parameter types
//! - `service`: Streamable HTTP service factory for nesting into axum
//!
//! The server is generic over `S: Store`, using zero-cost abstractions
//! (no dynamic dispatch), and carries the same read-only gate as the
//! HTTP boundary: mutating tools check the flag before any store access.

pub mod server;
mod service;
pub mod tools;

#[cfg(test)]
mod server_test;

pub use server::McpServer;
pub use service::create_mcp_service;

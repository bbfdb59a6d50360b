//! In-memory storage layer.
//!
//! This module provides trait-based abstractions for the record store,
//! keeping the boundary layers (HTTP, MCP) agnostic of the concrete
//! backend.
//!
//! # Architecture
//!
//! - `error`: store error types
//! - `models`: domain entities (Record, Comment) and the update patch
//! - `repository`: trait definitions for data access
//! - `memory`: the process-local `MemoryStore` backend

mod error;
mod memory;
mod models;
mod repository;

#[cfg(test)]
mod error_test;
#[cfg(test)]
mod models_test;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::*;
pub use repository::*;

//! Application state for the API server.

use std::sync::Arc;

use crate::config::Settings;
use crate::store::Store;

/// Shared application state.
///
/// Holds the store behind an `Arc` plus the process settings. Generic
/// over `S: Store` so tests can instantiate isolated stores; the store
/// is injected via the constructor, never created internally.
pub struct AppState<S: Store> {
    store: Arc<S>,
    settings: Settings,
}

// Manual Clone impl - we only need the Arc to be cloneable, not S.
impl<S: Store> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            settings: self.settings.clone(),
        }
    }
}

impl<S: Store> AppState<S> {
    /// Create a new AppState with the given store and settings.
    pub fn new(store: S, settings: Settings) -> Self {
        Self {
            store: Arc::new(store),
            settings,
        }
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a cloned Arc to the store.
    ///
    /// Useful for passing the store to services that need `Arc<S>`.
    pub fn store_arc(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Get the process settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;

/// Shared application state.
///
/// Holds the one store instance; the MCP service is handed a clone of the
/// same `Arc`, so both front ends observe the same lists and items.
pub struct AppState<D: Database> {
    db: Arc<D>,
}

// Manual Clone impl - we only need Arc to be cloneable, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> AppState<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    /// Get a reference to the store.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Get a cloned Arc to the store.
    pub fn db_arc(&self) -> Arc<D> {
        Arc::clone(&self.db)
    }
}

//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through Axum's state
//! extraction. Sessions are not part of the state; they are provided per request by the
//! session layer.

use sea_orm::DatabaseConnection;

/// Shared resources available to every handler.
///
/// `DatabaseConnection` wraps a connection pool, so clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

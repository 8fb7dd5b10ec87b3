use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared data handed to every request handler.
///
/// The connection pool sits behind an `Arc` so each worker's copy of the state
/// points at the same pool, and `main` can take it back to close it.
#[derive(Clone)]
pub struct AppState {
    /// ORM connection pool
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    /// Wraps an open connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }
}

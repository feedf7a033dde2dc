//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request through Axum's
//! state extraction. It holds the database pool and the query catalog, which is built once
//! and only ever read afterwards.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::query::catalog::Catalog;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and the catalog
/// sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Sortable columns and relations of every entity, validated at startup.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `catalog` - Validated query catalog
    pub fn new(db: DatabaseConnection, catalog: Catalog) -> Self {
        Self {
            db,
            catalog: Arc::new(catalog),
        }
    }
}

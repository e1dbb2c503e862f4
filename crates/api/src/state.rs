use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; no in-memory state is held between requests
/// beyond the connection pool itself.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: taskdeck_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Each handler checks out one connection per statement.
    pub pool: grandline_db::DbPool,
    /// Server configuration (read by the auth extractor and login handler).
    pub config: Arc<ServerConfig>,
}

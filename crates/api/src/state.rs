use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is created by `main` at startup and released on shutdown; nothing
/// holds a module-level database handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: utaroom_db::DbPool,
    /// Server configuration (base domain for tenant resolution, timeouts).
    pub config: Arc<ServerConfig>,
}

use std::sync::Arc;

use promptchat_core::catalog::CatalogConfig;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: promptchat_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Built-in models, entitlements and the fallback model.
    pub catalog: Arc<CatalogConfig>,
}

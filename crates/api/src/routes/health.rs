//! Liveness endpoint mounted at the root, outside `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the prompt store is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    /// Whether the prompt store answered a round-trip query.
    pub db_healthy: bool,
    /// Number of configured built-in chat models.
    pub builtin_models: usize,
    /// Model used when a selection does not resolve.
    pub default_model: String,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = promptchat_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the prompt store");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        builtin_models: state.catalog.builtins.len(),
        default_model: state.catalog.default_model_id.clone(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

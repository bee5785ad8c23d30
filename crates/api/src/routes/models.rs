//! Route definitions for the model catalog and model selection.
//!
//! Two routers are provided:
//! - `router()` for the catalog mounted at `/models`
//! - `selection_router()` for the selection cookie at `/user/chat-model`

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::models;
use crate::state::AppState;

/// Catalog routes mounted at `/models`.
///
/// ```text
/// GET /  -> list_models
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(models::list_models))
}

/// Selection routes mounted at `/user/chat-model`.
///
/// ```text
/// PUT /  -> select_model
/// ```
pub fn selection_router() -> Router<AppState> {
    Router::new().route("/", put(models::select_model))
}

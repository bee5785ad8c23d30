pub mod chat;
pub mod health;
pub mod models;
pub mod prompts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy (all routes require a Bearer token):
///
/// ```text
/// /prompts                                  list, save, delete (?promptType=)
/// /prompts/{prompt_type}                    get one
///
/// /models                                   catalog + current selection
/// /user/chat-model                          select model (PUT, sets cookie)
///
/// /chat/prepare                             validate + resolve a chat request
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/prompts", prompts::router())
        .nest("/models", models::router())
        .nest("/user/chat-model", models::selection_router())
        .nest("/chat", chat::router())
}

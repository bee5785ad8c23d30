//! Route definitions for chat requests.
//!
//! ```text
//! CHAT (mounted at /chat):
//! POST   /prepare               prepare_chat
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/prepare", post(chat::prepare_chat))
}

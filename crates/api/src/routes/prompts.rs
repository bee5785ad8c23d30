//! Route definitions for custom prompts.
//!
//! ```text
//! PROMPTS (mounted at /prompts):
//! GET    /                      list_prompts
//! POST   /                      save_prompt
//! DELETE /?promptType=          delete_prompt
//! GET    /{prompt_type}         get_prompt
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::prompts;
use crate::state::AppState;

/// Prompt routes -- mounted at `/prompts`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(prompts::list_prompts)
                .post(prompts::save_prompt)
                .delete(prompts::delete_prompt),
        )
        .route("/{prompt_type}", get(prompts::get_prompt))
}

//! Custom prompt models and DTOs.
//!
//! A user owns at most one prompt per prompt type. Rows serialize with
//! camelCase keys (`promptType`, `promptText`, ...) to match the prompts API.

use promptchat_core::catalog::PromptSource;
use promptchat_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `user_prompts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrompt {
    pub id: DbId,
    pub user_id: DbId,
    pub prompt_type: String,
    pub prompt_text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PromptSource for UserPrompt {
    fn prompt_type(&self) -> &str {
        &self.prompt_type
    }

    fn prompt_text(&self) -> &str {
        &self.prompt_text
    }
}

/// Result of an upsert: the stored row and whether it was newly created.
#[derive(Debug, Clone, FromRow)]
pub struct UpsertedUserPrompt {
    #[sqlx(flatten)]
    pub prompt: UserPrompt,
    pub inserted: bool,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating or replacing a user's prompt of a given type.
#[derive(Debug, Clone)]
pub struct UpsertUserPrompt {
    pub prompt_type: String,
    pub prompt_text: String,
}

//! Repository for the `user_prompts` table.
//!
//! Every query is scoped by `user_id`; there is no way to read or touch
//! another user's prompts through this type.

use promptchat_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_prompt::{UpsertUserPrompt, UpsertedUserPrompt, UserPrompt};

/// Column list for `user_prompts` queries.
const COLUMNS: &str = "\
    id, user_id, prompt_type, prompt_text, \
    created_at, updated_at";

/// Provides data access for user prompts.
pub struct UserPromptRepo;

impl UserPromptRepo {
    /// Insert a prompt or replace the text of the existing one.
    ///
    /// A single `ON CONFLICT (user_id, prompt_type) DO UPDATE` statement, so
    /// concurrent upserts of the same key cannot both insert. `created_at` is
    /// kept on update; `updated_at` always moves forward, even when two
    /// updates land within the same clock tick.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        dto: &UpsertUserPrompt,
    ) -> Result<UpsertedUserPrompt, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_prompts (user_id, prompt_type, prompt_text) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_user_prompts_user_id_prompt_type DO UPDATE SET \
                 prompt_text = EXCLUDED.prompt_text, \
                 updated_at = GREATEST(now(), user_prompts.updated_at + interval '1 microsecond') \
             RETURNING {COLUMNS}, (xmax = 0) AS inserted"
        );
        sqlx::query_as::<_, UpsertedUserPrompt>(&query)
            .bind(user_id)
            .bind(&dto.prompt_type)
            .bind(&dto.prompt_text)
            .fetch_one(pool)
            .await
    }

    /// All prompts owned by `user_id`, ordered by prompt type.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserPrompt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_prompts WHERE user_id = $1 ORDER BY prompt_type"
        );
        sqlx::query_as::<_, UserPrompt>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a single prompt by its `(user_id, prompt_type)` key.
    pub async fn find_by_key(
        pool: &PgPool,
        user_id: DbId,
        prompt_type: &str,
    ) -> Result<Option<UserPrompt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_prompts WHERE user_id = $1 AND prompt_type = $2"
        );
        sqlx::query_as::<_, UserPrompt>(&query)
            .bind(user_id)
            .bind(prompt_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a prompt by key. Returns `true` if a row was removed; deleting
    /// a missing key is not an error.
    pub async fn delete_by_key(
        pool: &PgPool,
        user_id: DbId,
        prompt_type: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM user_prompts WHERE user_id = $1 AND prompt_type = $2")
                .bind(user_id)
                .bind(prompt_type)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}

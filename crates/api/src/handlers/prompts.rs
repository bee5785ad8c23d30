//! Handlers for the caller's custom prompts.
//!
//! Each prompt is keyed by `(user, promptType)`. Saving an existing type
//! replaces its text; deleting a missing type is a successful no-op.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use promptchat_core::error::CoreError;
use promptchat_core::prompt::{validate_prompt_text, validate_prompt_type};
use promptchat_db::models::user_prompt::UpsertUserPrompt;
use promptchat_db::repositories::UserPromptRepo;

use crate::error::{is_foreign_key_violation, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for saving a prompt. Both fields are required; they are
/// optional here so a missing field is reported as a 400 with our message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePromptRequest {
    pub prompt_type: Option<String>,
    pub prompt_text: Option<String>,
}

/// Query parameters for `DELETE /prompts`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePromptParams {
    pub prompt_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeletePromptResponse {
    pub deleted: bool,
}

// ---------------------------------------------------------------------------
// POST /prompts
// ---------------------------------------------------------------------------

/// Create or replace the caller's prompt of the given type.
///
/// Returns 201 when a new record was created and 200 when an existing one
/// was updated.
pub async fn save_prompt(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<SavePromptRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload?;

    let (Some(prompt_type), Some(prompt_text)) = (body.prompt_type, body.prompt_text) else {
        return Err(AppError::BadRequest(
            "promptType and promptText are required".into(),
        ));
    };
    validate_prompt_type(&prompt_type)?;
    validate_prompt_text(&prompt_text)?;

    let input = UpsertUserPrompt {
        prompt_type,
        prompt_text,
    };

    let result = UserPromptRepo::upsert(&state.pool, auth.user_id, &input)
        .await
        .map_err(|err| {
            if is_foreign_key_violation(&err) {
                AppError::Core(CoreError::Unauthorized("User account no longer exists".into()))
            } else {
                AppError::Database(err)
            }
        })?;

    tracing::info!(
        user_id = auth.user_id,
        prompt_type = %result.prompt.prompt_type,
        inserted = result.inserted,
        "User prompt saved"
    );

    let status = if result.inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(DataResponse { data: result.prompt })))
}

// ---------------------------------------------------------------------------
// GET /prompts
// ---------------------------------------------------------------------------

/// List all of the caller's prompts.
pub async fn list_prompts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<impl IntoResponse> {
    let prompts = UserPromptRepo::list_by_user(&state.pool, auth.user_id).await?;

    tracing::debug!(count = prompts.len(), user_id = auth.user_id, "Listed user prompts");

    Ok(Json(DataResponse { data: prompts }))
}

// ---------------------------------------------------------------------------
// GET /prompts/{prompt_type}
// ---------------------------------------------------------------------------

/// Fetch one of the caller's prompts by type.
pub async fn get_prompt(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(prompt_type): Path<String>,
) -> AppResult<impl IntoResponse> {
    let prompt = UserPromptRepo::find_by_key(&state.pool, auth.user_id, &prompt_type)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "UserPrompt",
                key: prompt_type,
            })
        })?;

    Ok(Json(DataResponse { data: prompt }))
}

// ---------------------------------------------------------------------------
// DELETE /prompts?promptType=
// ---------------------------------------------------------------------------

/// Delete the caller's prompt of the given type. Succeeds whether or not it
/// existed; `deleted` tells the two cases apart.
pub async fn delete_prompt(
    State(state): State<AppState>,
    auth: AuthUser,
    params: Result<Query<DeletePromptParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;

    let prompt_type = params
        .prompt_type
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("promptType query parameter is required".into()))?;

    let deleted = UserPromptRepo::delete_by_key(&state.pool, auth.user_id, &prompt_type).await?;

    tracing::info!(
        user_id = auth.user_id,
        prompt_type = %prompt_type,
        deleted,
        "User prompt delete requested"
    );

    Ok(Json(DataResponse {
        data: DeletePromptResponse { deleted },
    }))
}

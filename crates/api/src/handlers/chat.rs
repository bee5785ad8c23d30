//! Chat request preparation.
//!
//! Validates the chat envelope and settles which model will answer it. A
//! `custom-` selection whose prompt has been deleted is not an error: the
//! request proceeds on the fallback model. Calling the language model itself
//! happens downstream of this service.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use promptchat_core::catalog::resolve_or_default;
use promptchat_core::chat_request::{ChatRequest, VisibilityType};

use crate::error::{AppError, AppResult};
use crate::handlers::models::load_catalog;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// What the completion step needs to run this chat turn.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatPreparation {
    pub chat_id: Uuid,
    pub message_id: Uuid,
    /// Model the turn will run on.
    pub model_id: String,
    /// The id the client asked for.
    pub requested_model_id: String,
    /// `true` when the requested model did not resolve.
    pub fell_back: bool,
    /// Prompt text of the selected custom prompt, if any.
    pub system_prompt: Option<String>,
    pub visibility: &'static str,
}

// ---------------------------------------------------------------------------
// POST /chat/prepare
// ---------------------------------------------------------------------------

pub async fn prepare_chat(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(request) = payload?;
    let requested = request.validated_model_id()?;

    let (prompts, catalog) = load_catalog(&state, &auth).await?;
    let resolution = resolve_or_default(
        Some(&requested),
        &catalog,
        &state.catalog.default_model_id,
    )
    .ok_or_else(|| AppError::InternalError("No chat models available".into()))?;

    if resolution.fell_back {
        tracing::debug!(
            user_id = auth.user_id,
            requested = %requested,
            model_id = %resolution.model.id,
            "Requested model did not resolve, using fallback"
        );
    }

    let system_prompt = resolution.model.source_prompt_type.as_deref().and_then(|prompt_type| {
        prompts
            .iter()
            .find(|p| p.prompt_type == prompt_type)
            .map(|p| p.prompt_text.clone())
    });

    let visibility = match request.selected_visibility_type {
        VisibilityType::Public => "public",
        VisibilityType::Private => "private",
    };

    let preparation = ChatPreparation {
        chat_id: request.id,
        message_id: request.message.id,
        model_id: resolution.model.id.clone(),
        requested_model_id: requested.to_wire(),
        fell_back: resolution.fell_back,
        system_prompt,
        visibility,
    };

    tracing::info!(
        user_id = auth.user_id,
        chat_id = %preparation.chat_id,
        model_id = %preparation.model_id,
        "Chat request prepared"
    );

    Ok(Json(DataResponse { data: preparation }))
}

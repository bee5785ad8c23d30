//! Handlers for the chat model catalog and the caller's model selection.
//!
//! The catalog is rebuilt per request from the configured built-ins and the
//! caller's stored prompts. The selection lives in the `chat-model` cookie;
//! a selection that no longer resolves falls back to the default model.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use promptchat_core::catalog::{build_catalog, catalog_collisions, resolve_or_default, resolve_selected};
use promptchat_core::chat_model::{ChatModelId, ModelDescriptor};
use promptchat_core::error::CoreError;
use promptchat_core::selection::{selection_cookie, selection_from_cookie_header};
use promptchat_db::models::user_prompt::UserPrompt;
use promptchat_db::repositories::UserPromptRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub models: Vec<ModelDescriptor>,
    pub selected_model_id: Option<String>,
    pub selected: Option<ModelDescriptor>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectModelRequest {
    pub model_id: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load the caller's prompts and build their catalog.
///
/// Returns the prompts too, so callers needing the full prompt text do not
/// query again.
pub(crate) async fn load_catalog(
    state: &AppState,
    auth: &AuthUser,
) -> AppResult<(Vec<UserPrompt>, Vec<ModelDescriptor>)> {
    let prompts = UserPromptRepo::list_by_user(&state.pool, auth.user_id).await?;
    let catalog = build_catalog(
        &state.catalog.builtins,
        &state.catalog.entitlements,
        auth.user_type,
        &prompts,
    );

    for model_id in catalog_collisions(&catalog) {
        tracing::warn!(
            user_id = auth.user_id,
            model_id = %model_id,
            "Model id appears more than once in catalog"
        );
    }

    Ok((prompts, catalog))
}

fn selection_from_headers(headers: &HeaderMap) -> Option<ChatModelId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(selection_from_cookie_header)
}

// ---------------------------------------------------------------------------
// GET /models
// ---------------------------------------------------------------------------

/// The caller's catalog together with the currently selected model.
pub async fn list_models(
    State(state): State<AppState>,
    auth: AuthUser,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let (_prompts, catalog) = load_catalog(&state, &auth).await?;

    let requested = selection_from_headers(&headers);
    let resolution = resolve_or_default(
        requested.as_ref(),
        &catalog,
        &state.catalog.default_model_id,
    );

    if let (Some(requested), Some(resolution)) = (&requested, &resolution) {
        if resolution.fell_back {
            tracing::debug!(
                user_id = auth.user_id,
                requested = %requested,
                model_id = %resolution.model.id,
                "Selected model no longer available, using fallback"
            );
        }
    }

    let selected = resolution.map(|r| r.model.clone());
    let response = CatalogResponse {
        selected_model_id: selected.as_ref().map(|m| m.id.clone()),
        selected,
        models: catalog,
    };

    Ok(Json(DataResponse { data: response }))
}

// ---------------------------------------------------------------------------
// PUT /user/chat-model
// ---------------------------------------------------------------------------

/// Persist the caller's model selection in the `chat-model` cookie.
///
/// The id must resolve against the caller's current catalog, so a deleted
/// prompt or an unentitled built-in cannot be selected.
pub async fn select_model(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<SelectModelRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload?;
    let model_id = ChatModelId::parse(&body.model_id)?;

    let (_prompts, catalog) = load_catalog(&state, &auth).await?;
    let model = resolve_selected(&model_id, &catalog)
        .cloned()
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Model '{model_id}' is not available"
            )))
        })?;

    let cookie = selection_cookie(&model_id, state.config.chat_model_cookie_max_age_secs);

    tracing::info!(user_id = auth.user_id, model_id = %model_id, "Chat model selected");

    Ok(([(SET_COOKIE, cookie)], Json(DataResponse { data: model })))
}

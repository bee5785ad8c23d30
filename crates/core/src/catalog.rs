//! Model catalog: built-in models merged with models derived from the
//! caller's stored prompts.
//!
//! The catalog is never stored. It is a pure function of the configured
//! built-ins, the caller's entitlements and the caller's prompt records,
//! recomputed whenever it is needed.

use std::collections::HashMap;

use crate::chat_model::{
    builtin_descriptors, is_builtin_model_id, ChatModelId, ModelDescriptor, DEFAULT_CHAT_MODEL,
};
use crate::error::CoreError;
use crate::prompt::{description_preview, prompt_type_display_name};
use crate::user_types::{Entitlements, UserType};

/// Anything that looks like a stored prompt record.
pub trait PromptSource {
    fn prompt_type(&self) -> &str;
    fn prompt_text(&self) -> &str;
}

/// Static catalog inputs shared by every request.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Built-in models in display order.
    pub builtins: Vec<ModelDescriptor>,
    /// Which built-ins each user type may see.
    pub entitlements: Entitlements,
    /// Built-in id used when a selection cannot be resolved.
    pub default_model_id: String,
}

impl CatalogConfig {
    /// Default registry and entitlements with the given fallback model.
    pub fn with_default_model(default_model_id: &str) -> Result<Self, CoreError> {
        if !is_builtin_model_id(default_model_id) {
            return Err(CoreError::Validation(format!(
                "Default chat model '{default_model_id}' is not a built-in model"
            )));
        }
        Ok(Self {
            builtins: builtin_descriptors(),
            entitlements: Entitlements::default(),
            default_model_id: default_model_id.to_string(),
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            builtins: builtin_descriptors(),
            entitlements: Entitlements::default(),
            default_model_id: DEFAULT_CHAT_MODEL.to_string(),
        }
    }
}

/// Catalog entry derived from a stored prompt.
pub fn derive_descriptor<P: PromptSource>(prompt: &P) -> ModelDescriptor {
    let prompt_type = prompt.prompt_type();
    ModelDescriptor {
        id: ChatModelId::custom(prompt_type).to_wire(),
        name: prompt_type_display_name(prompt_type),
        description: description_preview(prompt.prompt_text()),
        source_prompt_type: Some(prompt_type.to_string()),
    }
}

/// Build the caller's catalog.
///
/// Entitled built-ins come first in their configured order, followed by one
/// derived entry per prompt in the order given. No de-duplication happens;
/// see [`catalog_collisions`].
pub fn build_catalog<P: PromptSource>(
    builtins: &[ModelDescriptor],
    entitlements: &Entitlements,
    user_type: UserType,
    prompts: &[P],
) -> Vec<ModelDescriptor> {
    builtins
        .iter()
        .filter(|model| entitlements.is_entitled(user_type, &model.id))
        .cloned()
        .chain(prompts.iter().map(derive_descriptor))
        .collect()
}

/// Look up a selected id in a catalog.
///
/// Custom ids match derived entries by source prompt type; built-in ids match
/// built-in entries by id. `None` means the selection no longer resolves,
/// e.g. the prompt was deleted after the id was saved.
pub fn resolve_selected<'a>(
    selected: &ChatModelId,
    catalog: &'a [ModelDescriptor],
) -> Option<&'a ModelDescriptor> {
    match selected {
        ChatModelId::CustomPrompt(prompt_type) => catalog
            .iter()
            .find(|model| model.source_prompt_type.as_deref() == Some(prompt_type.as_str())),
        ChatModelId::Builtin(id) => catalog
            .iter()
            .find(|model| !model.is_custom() && model.id == *id),
    }
}

/// Outcome of resolving a selection with fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub model: &'a ModelDescriptor,
    /// `true` when the requested selection was absent or unresolved.
    pub fell_back: bool,
}

/// Resolve `selected`, falling back to `default_model_id` and then to the
/// first catalog entry. Returns `None` only for an empty catalog.
pub fn resolve_or_default<'a>(
    selected: Option<&ChatModelId>,
    catalog: &'a [ModelDescriptor],
    default_model_id: &str,
) -> Option<Resolution<'a>> {
    if let Some(model) = selected.and_then(|id| resolve_selected(id, catalog)) {
        return Some(Resolution {
            model,
            fell_back: false,
        });
    }

    let default_id = ChatModelId::Builtin(default_model_id.to_string());
    resolve_selected(&default_id, catalog)
        .or_else(|| catalog.first())
        .map(|model| Resolution {
            model,
            fell_back: true,
        })
}

/// Ids that occur more than once in `catalog`, in first-seen order.
///
/// Only possible if a built-in id literally equals `custom-<promptType>`.
pub fn catalog_collisions(catalog: &[ModelDescriptor]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for model in catalog {
        *counts.entry(model.id.as_str()).or_default() += 1;
    }

    let mut collisions: Vec<String> = Vec::new();
    for model in catalog {
        if counts[model.id.as_str()] > 1 && !collisions.contains(&model.id) {
            collisions.push(model.id.clone());
        }
    }
    collisions
}

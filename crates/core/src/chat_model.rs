//! Chat model identifiers and the built-in model registry.
//!
//! On the wire a selected model is a single string: either one of the fixed
//! built-in ids or `custom-<promptType>` for a model derived from a stored
//! prompt. [`ChatModelId`] is the parsed, tagged form of that string and is
//! what the rest of the code passes around.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Prefix marking a model id derived from a stored custom prompt.
pub const CUSTOM_MODEL_PREFIX: &str = "custom-";

pub const CHAT_MODEL: &str = "chat-model";
pub const CHAT_MODEL_REASONING: &str = "chat-model-reasoning";
pub const CHAT_MODEL_ENGLISH_PROMPT: &str = "chat-english-prompt";

/// Built-in model used when nothing else resolves.
pub const DEFAULT_CHAT_MODEL: &str = CHAT_MODEL;

/// Built-in models in their configured display order: `(id, name, description)`.
pub const BUILTIN_MODELS: &[(&str, &str, &str)] = &[
    (
        CHAT_MODEL,
        "Chat model",
        "Primary model for all-purpose chat",
    ),
    (
        CHAT_MODEL_REASONING,
        "Reasoning model",
        "Uses advanced reasoning",
    ),
    (
        CHAT_MODEL_ENGLISH_PROMPT,
        "English tutor",
        "Built-in prompt for English lessons",
    ),
];

/// Whether `id` is one of the fixed built-in model ids.
pub fn is_builtin_model_id(id: &str) -> bool {
    BUILTIN_MODELS.iter().any(|(builtin, _, _)| *builtin == id)
}

// ---------------------------------------------------------------------------
// Descriptor
// ---------------------------------------------------------------------------

/// A selectable entry of the model catalog.
///
/// Built-in entries have no `source_prompt_type`; derived entries point back
/// at the prompt type they were generated from. The back-reference is used
/// for lookup only, the catalog is rebuilt on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_prompt_type: Option<String>,
}

impl ModelDescriptor {
    pub fn builtin(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            source_prompt_type: None,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.source_prompt_type.is_some()
    }
}

/// Descriptors for every entry of [`BUILTIN_MODELS`], in configured order.
pub fn builtin_descriptors() -> Vec<ModelDescriptor> {
    BUILTIN_MODELS
        .iter()
        .map(|(id, name, description)| ModelDescriptor::builtin(id, name, description))
        .collect()
}

// ---------------------------------------------------------------------------
// Identifier
// ---------------------------------------------------------------------------

/// A selected model id, parsed once from its wire form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChatModelId {
    /// One of the fixed built-in ids.
    Builtin(String),
    /// A model derived from the caller's prompt of this type.
    CustomPrompt(String),
}

impl ChatModelId {
    /// Parse a wire-format model id.
    ///
    /// Accepts a known built-in id or anything starting with `custom-`.
    /// Whether that prompt exists is a separate question answered by catalog
    /// resolution; a bare `custom-` carries an empty prompt type and never
    /// resolves.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if let Some(prompt_type) = raw.strip_prefix(CUSTOM_MODEL_PREFIX) {
            return Ok(ChatModelId::CustomPrompt(prompt_type.to_string()));
        }
        if is_builtin_model_id(raw) {
            return Ok(ChatModelId::Builtin(raw.to_string()));
        }
        Err(CoreError::Validation(format!(
            "Must be a valid model id (built-in model or custom model starting with \
             '{CUSTOM_MODEL_PREFIX}'), got '{raw}'"
        )))
    }

    pub fn custom(prompt_type: impl Into<String>) -> Self {
        ChatModelId::CustomPrompt(prompt_type.into())
    }

    /// Wire form: the built-in id, or `custom-` followed by the prompt type.
    pub fn to_wire(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChatModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatModelId::Builtin(id) => f.write_str(id),
            ChatModelId::CustomPrompt(prompt_type) => {
                write!(f, "{CUSTOM_MODEL_PREFIX}{prompt_type}")
            }
        }
    }
}

impl FromStr for ChatModelId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChatModelId::parse(s)
    }
}

impl Serialize for ChatModelId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChatModelId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ChatModelId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

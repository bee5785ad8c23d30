//! Inbound chat message envelope and its validation rules.
//!
//! The `selectedChatModel` check is syntactic only: a `custom-` id passes even
//! if the prompt behind it has since been deleted. Existence is settled later
//! by catalog resolution, which falls back instead of rejecting.

use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::chat_model::ChatModelId;
use crate::error::CoreError;
use crate::types::Timestamp;

/// Maximum length of message content and of each text part, in characters.
pub const MAX_MESSAGE_LENGTH: u64 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPartKind {
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AttachmentContentType {
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/jpg")]
    Jpg,
    #[serde(rename = "image/jpeg")]
    Jpeg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityType {
    Public,
    Private,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TextPart {
    #[validate(length(min = 1, max = MAX_MESSAGE_LENGTH))]
    pub text: String,
    #[serde(rename = "type")]
    pub kind: TextPartKind,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[validate(url)]
    pub url: String,
    #[validate(length(min = 1, max = MAX_MESSAGE_LENGTH))]
    pub name: String,
    pub content_type: AttachmentContentType,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub created_at: Timestamp,
    pub role: MessageRole,
    #[validate(length(min = 1, max = MAX_MESSAGE_LENGTH))]
    pub content: String,
    #[validate(nested)]
    pub parts: Vec<TextPart>,
    #[serde(default, rename = "experimental_attachments")]
    #[validate(nested)]
    pub experimental_attachments: Option<Vec<Attachment>>,
}

/// Body of a chat request.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub id: Uuid,
    #[validate(nested)]
    pub message: ChatMessage,
    #[validate(custom(function = "validate_selected_chat_model"))]
    pub selected_chat_model: String,
    pub selected_visibility_type: VisibilityType,
}

impl ChatRequest {
    /// Run every field rule and return the parsed model selection.
    pub fn validated_model_id(&self) -> Result<ChatModelId, CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        ChatModelId::parse(&self.selected_chat_model)
    }
}

fn validate_selected_chat_model(value: &str) -> Result<(), ValidationError> {
    ChatModelId::parse(value).map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("selected_chat_model");
        err.message = Some(
            "Must be a valid model id (built-in model or custom model starting with 'custom-')"
                .into(),
        );
        err
    })
}

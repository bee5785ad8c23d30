//! Custom prompt validation and presentation helpers.
//!
//! A custom prompt is a user-owned text template keyed by a short prompt
//! type. These helpers are shared by the store boundary (validation) and the
//! model catalog (display name and description preview).

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length for a prompt type key in characters.
pub const MAX_PROMPT_TYPE_LENGTH: usize = 64;

/// Maximum length for prompt text in characters.
pub const MAX_PROMPT_TEXT_LENGTH: usize = 10_000;

/// Number of characters of prompt text shown as a catalog description.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Marker appended to a truncated description preview.
pub const ELLIPSIS: &str = "...";

/// Friendly names for the well-known prompt types.
const PROMPT_TYPE_NAMES: &[(&str, &str)] = &[
    ("lesson", "English"),
    ("question", "Question"),
    ("task", "Task"),
    ("story", "Story"),
    ("custom", "Custom"),
];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a prompt type key: non-empty and within the length limit.
///
/// The key is stored exactly as given. Whitespace is significant, so
/// `" lesson"` and `"lesson"` are two distinct prompts.
pub fn validate_prompt_type(prompt_type: &str) -> Result<(), CoreError> {
    if prompt_type.is_empty() {
        return Err(CoreError::Validation(
            "Prompt type must not be empty".to_string(),
        ));
    }
    let len = prompt_type.chars().count();
    if len > MAX_PROMPT_TYPE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Prompt type exceeds maximum length of {MAX_PROMPT_TYPE_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate prompt text: non-empty and within the length limit.
pub fn validate_prompt_text(text: &str) -> Result<(), CoreError> {
    if text.is_empty() {
        return Err(CoreError::Validation(
            "Prompt text must not be empty".to_string(),
        ));
    }
    let len = text.chars().count();
    if len > MAX_PROMPT_TEXT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Prompt text exceeds maximum length of {MAX_PROMPT_TEXT_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

/// Display name for a prompt type. Unknown types are shown verbatim.
pub fn prompt_type_display_name(prompt_type: &str) -> String {
    PROMPT_TYPE_NAMES
        .iter()
        .find(|(key, _)| *key == prompt_type)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| prompt_type.to_string())
}

/// First [`DESCRIPTION_PREVIEW_CHARS`] characters of `text`, with
/// [`ELLIPSIS`] appended when anything was cut off.
pub fn description_preview(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &text[..byte_idx]),
        None => text.to_string(),
    }
}

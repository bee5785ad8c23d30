//! Persistence of the selected chat model in a browser cookie.
//!
//! The cookie holds the wire form of a [`ChatModelId`], percent-encoded so
//! any prompt type survives the trip. A missing or malformed cookie simply
//! means "no selection".

use crate::chat_model::ChatModelId;

/// Name of the cookie storing the selected model id.
pub const CHAT_MODEL_COOKIE: &str = "chat-model";

/// Default cookie lifetime: one year.
pub const DEFAULT_COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Build a `Set-Cookie` header value storing `model_id`.
pub fn selection_cookie(model_id: &ChatModelId, max_age_secs: u64) -> String {
    format!(
        "{CHAT_MODEL_COOKIE}={}; Path=/; Max-Age={max_age_secs}; SameSite=Lax; HttpOnly",
        encode_cookie_value(&model_id.to_wire())
    )
}

/// Extract the selected model from a `Cookie` request header.
///
/// A value wrapped in double quotes is unwrapped before decoding.
pub fn selection_from_cookie_header(header: &str) -> Option<ChatModelId> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == CHAT_MODEL_COOKIE)
        .and_then(|(_, value)| decode_cookie_value(unquote(value)))
        .and_then(|raw| ChatModelId::parse(&raw).ok())
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

fn encode_cookie_value(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn decode_cookie_value(value: &str) -> Option<String> {
    urlencoding::decode(value).ok().map(|decoded| decoded.into_owned())
}

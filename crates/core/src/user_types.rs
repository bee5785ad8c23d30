//! Account tiers and the built-in models each tier may select.
//!
//! The user type travels inside the access token; the entitlement table is
//! held in application state so it can be swapped out in tests.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chat_model::{CHAT_MODEL, CHAT_MODEL_ENGLISH_PROMPT, CHAT_MODEL_REASONING};
use crate::error::CoreError;

pub const USER_TYPE_GUEST: &str = "guest";
pub const USER_TYPE_REGULAR: &str = "regular";

/// Tier of the authenticated account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Guest,
    Regular,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Guest => USER_TYPE_GUEST,
            UserType::Regular => USER_TYPE_REGULAR,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            USER_TYPE_GUEST => Ok(UserType::Guest),
            USER_TYPE_REGULAR => Ok(UserType::Regular),
            other => Err(CoreError::Validation(format!("Unknown user type '{other}'"))),
        }
    }
}

/// Lookup table from user type to the built-in model ids it may see.
#[derive(Debug, Clone)]
pub struct Entitlements {
    by_user_type: HashMap<UserType, Vec<String>>,
}

impl Entitlements {
    pub fn new(by_user_type: HashMap<UserType, Vec<String>>) -> Self {
        Self { by_user_type }
    }

    /// Built-in model ids available to `user_type`. Unlisted types get none.
    pub fn available_model_ids(&self, user_type: UserType) -> &[String] {
        self.by_user_type
            .get(&user_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_entitled(&self, user_type: UserType, model_id: &str) -> bool {
        self.available_model_ids(user_type)
            .iter()
            .any(|id| id == model_id)
    }
}

impl Default for Entitlements {
    fn default() -> Self {
        let guest = vec![CHAT_MODEL.to_string(), CHAT_MODEL_REASONING.to_string()];
        let regular = vec![
            CHAT_MODEL.to_string(),
            CHAT_MODEL_REASONING.to_string(),
            CHAT_MODEL_ENGLISH_PROMPT.to_string(),
        ];
        Self::new(HashMap::from([
            (UserType::Guest, guest),
            (UserType::Regular, regular),
        ]))
    }
}

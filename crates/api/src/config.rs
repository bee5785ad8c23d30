use promptchat_core::chat_model::DEFAULT_CHAT_MODEL;
use promptchat_core::selection::DEFAULT_COOKIE_MAX_AGE_SECS;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Built-in model used when a selection cannot be resolved.
    pub default_chat_model: String,
    /// Lifetime of the `chat-model` selection cookie in seconds.
    pub chat_model_cookie_max_age_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                          | Default                 |
    /// |----------------------------------|-------------------------|
    /// | `HOST`                           | `0.0.0.0`               |
    /// | `PORT`                           | `3000`                  |
    /// | `CORS_ORIGINS`                   | `http://localhost:3001` |
    /// | `REQUEST_TIMEOUT_SECS`           | `30`                    |
    /// | `DEFAULT_CHAT_MODEL`             | `chat-model`            |
    /// | `CHAT_MODEL_COOKIE_MAX_AGE_SECS` | one year                |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let default_chat_model =
            std::env::var("DEFAULT_CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.into());

        let chat_model_cookie_max_age_secs: u64 = std::env::var("CHAT_MODEL_COOKIE_MAX_AGE_SECS")
            .unwrap_or_else(|_| DEFAULT_COOKIE_MAX_AGE_SECS.to_string())
            .parse()
            .expect("CHAT_MODEL_COOKIE_MAX_AGE_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            default_chat_model,
            chat_model_cookie_max_age_secs,
            jwt,
        }
    }
}

//! Scalar aliases shared by the store rows and the API.

/// Row id of a `users` or `user_prompts` row (`BIGSERIAL`).
pub type DbId = i64;

/// `created_at` / `updated_at` of a stored prompt, always in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

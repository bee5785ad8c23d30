//! User rows. Only the fields needed to own prompts are modelled here.

use promptchat_core::types::{DbId, Timestamp};
use promptchat_core::user_types::UserType;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub user_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for provisioning a user row.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub user_type: UserType,
}

//! Domain logic for the prompt-aware chat service.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` crate
//! persists prompt records and the `api` crate wires both together.

pub mod catalog;
pub mod chat_model;
pub mod chat_request;
pub mod error;
pub mod prompt;
pub mod selection;
pub mod types;
pub mod user_types;

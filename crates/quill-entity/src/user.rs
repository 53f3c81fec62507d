//! Registered user (identity) model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user's stored credential record.
///
/// Created on registration; never mutated and never deleted through the
/// application. The cleartext password is never persisted — only the
/// salted Argon2id hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Generated unique identifier.
    pub id: i64,
    /// Unique, non-empty username.
    pub username: String,
    /// Salted one-way password hash.
    pub password_hash: String,
}

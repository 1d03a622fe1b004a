//! Auth read-model types
//!
//! Lightweight view of the `users` row owned by the accounts domain.
//! Never carries the password hash.

use serde::Serialize;

/// Lightweight identity for authenticated users.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct AuthIdentity {
    pub id: i64,
    pub email: String,
    pub skills: Option<String>,
}

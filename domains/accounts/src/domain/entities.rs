//! Account entities

use serde::Serialize;
use sqlx::FromRow;

/// Message for a registration whose email already has an account
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already registered.";

/// Registered user, including the stored password hash.
///
/// Never serialize this to a client; page handlers only read `email` and
/// `skills` out of it.
#[derive(Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub skills: Option<String>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("skills", &self.skills)
            .finish()
    }
}

/// A user about to be inserted; `password_hash` is already bcrypt-hashed.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}

//! Per-request context for authenticated users

use crate::types::AuthIdentity;

/// Represents an authenticated user context
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: AuthIdentity,
}

impl AuthContext {
    pub fn new(user: AuthIdentity) -> Self {
        Self { user }
    }

    pub fn user_id(&self) -> i64 {
        self.user.id
    }

    /// Skills text, empty when the user never filled in a profile
    pub fn skills(&self) -> &str {
        self.user.skills.as_deref().unwrap_or("")
    }
}

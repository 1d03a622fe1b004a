//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("no session")]
    MissingSession,

    #[error("invalid or expired session")]
    InvalidSession,

    #[error("session user not found")]
    UserNotFound,

    #[error("failed to load user")]
    UserLoadError,

    #[error("failed to issue session")]
    TokenIssueError,

    #[error("password hashing failed: {0}")]
    HashingError(String),
}

impl AuthError {
    /// Whether the request simply has no usable session (as opposed to a
    /// server-side failure while checking it).
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            AuthError::MissingSession | AuthError::InvalidSession | AuthError::UserNotFound
        )
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = if self.is_unauthenticated() {
            (StatusCode::UNAUTHORIZED, "Unauthorized")
        } else {
            tracing::error!(error = %self, "Authentication backend failure");
            (StatusCode::INTERNAL_SERVER_ERROR, "Authentication failed")
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}

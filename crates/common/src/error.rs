//! Request-level error taxonomy
//!
//! Domain services and repositories return [`Error`]; page handlers either
//! turn it into a flash message or let it render as a JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input rejected by a business rule (password policy, form checks)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Uniqueness clash, e.g. an email that is already registered
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Query or transaction failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failure outside the database (templates, hashing)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// HTTP status and machine-readable code for the JSON body
    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            Error::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Error::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Error::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = self.classify();
        if status.is_server_error() {
            tracing::error!(error = %self, code, "Request failed");
        }

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        }));
        (status, body).into_response()
    }
}

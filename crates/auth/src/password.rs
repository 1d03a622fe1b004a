//! Password policy and bcrypt hashing

use crate::error::AuthError;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// User-facing message for a password that fails the policy
pub const PASSWORD_POLICY_MESSAGE: &str =
    "Password must be 8+ characters with uppercase and digit.";

/// Check the password policy: at least 8 characters, one uppercase letter
/// and one digit.
pub fn meets_policy(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(char::is_uppercase)
        && password.chars().any(char::is_numeric)
}

/// Hash a password with bcrypt.
///
/// Runs on the blocking thread pool; bcrypt is CPU-bound.
pub async fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || {
        bcrypt::hash(password, cost).map_err(|e| AuthError::HashingError(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::HashingError(format!("Task join error: {}", e)))?
}

/// Verify a password against a bcrypt hash.
///
/// A malformed stored hash counts as a mismatch.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || match bcrypt::verify(password, &hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be parsed");
            false
        }
    })
    .await
    .map_err(|e| AuthError::HashingError(format!("Task join error: {}", e)))
}

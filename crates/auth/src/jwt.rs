//! Session token signing and validation

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Sign a session token for `user_id`
pub(crate) fn issue_session_token(user_id: i64, config: &AuthConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp().max(0) as u64;
    let ttl_secs = config.session_ttl_hours.max(1) as u64 * 3600;

    let claims = SessionClaims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + ttl_secs,
    };

    let encoding_key = EncodingKey::from_secret(config.session_secret.as_ref());
    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, user_id, "Failed to sign session token");
        AuthError::TokenIssueError
    })
}

/// Validate a session token and return its claims
pub(crate) fn validate_session_token(
    token: &str,
    config: &AuthConfig,
) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    let decoding_key = DecodingKey::from_secret(config.session_secret.as_ref());

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Session token validation failed");
        AuthError::InvalidSession
    })?;

    Ok(token_data.claims)
}

/// Parse the user id out of validated claims
pub(crate) fn user_id_from_claims(claims: &SessionClaims) -> Result<i64, AuthError> {
    claims
        .sub
        .parse::<i64>()
        .map_err(|_| AuthError::InvalidSession)
}

//! Concrete authentication backend
//!
//! Wraps `PgPool` + `AuthConfig` and owns the session read-model query.
//! Uses runtime `sqlx::query_as` (not macros) so the crate builds without
//! a live database.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sqlx::PgPool;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::{issue_session_token, user_id_from_claims, validate_session_token};
use crate::types::AuthIdentity;

/// Name of the cookie carrying the signed session token
pub const SESSION_COOKIE: &str = "session";

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    pool: PgPool,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        Self { pool, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Find user identity by ID (read model: never selects the password hash)
    pub(crate) async fn find_user(&self, id: i64) -> Result<Option<AuthIdentity>, AuthError> {
        let user: Option<AuthIdentity> = sqlx::query_as(
            r#"
            SELECT id, email, skills
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = id, "Failed to load user");
            AuthError::UserLoadError
        })?;

        Ok(user)
    }

    /// Resolve a session token to the user it was issued for.
    pub(crate) async fn authenticate_session(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = validate_session_token(token, &self.config)?;
        let user_id = user_id_from_claims(&claims)?;

        let user = self
            .find_user(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AuthContext::new(user))
    }

    /// User id carried by the request's session cookie, if it has a valid one.
    ///
    /// Only checks the signature and expiry; does not touch the database.
    pub fn session_user_id(&self, jar: &CookieJar) -> Option<i64> {
        let cookie = jar.get(SESSION_COOKIE)?;
        let claims = validate_session_token(cookie.value(), &self.config).ok()?;
        user_id_from_claims(&claims).ok()
    }

    /// Build the cookie that establishes a session for `user_id`.
    pub fn issue_session(&self, user_id: i64) -> Result<Cookie<'static>, AuthError> {
        let token = issue_session_token(user_id, &self.config)?;
        Ok(Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.config.cookie_secure)
            .build())
    }

    /// Cookie used to remove the session
    pub fn session_removal(&self) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE).path("/").build()
    }
}

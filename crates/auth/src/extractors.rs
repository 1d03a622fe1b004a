//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::{AuthBackend, SESSION_COOKIE};
use crate::context::AuthContext;
use crate::error::AuthError;

async fn authenticate_parts<S>(parts: &Parts, state: &S) -> Result<AuthContext, AuthError>
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    let backend = AuthBackend::from_ref(state);
    let jar = CookieJar::from_headers(&parts.headers);

    let token = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::MissingSession)?;

    backend.authenticate_session(&token).await
}

/// Authenticated user for page routes.
///
/// Requests without a valid session are redirected to `/login`.
#[derive(Debug)]
pub struct AuthUser(pub AuthContext);

/// Rejection for `AuthUser`
#[derive(Debug)]
pub enum LoginRedirect {
    Unauthenticated,
    Failed(AuthError),
}

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        match self {
            LoginRedirect::Unauthenticated => Redirect::to("/login").into_response(),
            LoginRedirect::Failed(e) => e.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = LoginRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        match authenticate_parts(parts, state).await {
            Ok(ctx) => Ok(AuthUser(ctx)),
            Err(e) if e.is_unauthenticated() => {
                tracing::warn!(path = %parts.uri.path(), reason = %e, "Unauthorized access");
                Err(LoginRedirect::Unauthenticated)
            }
            Err(e) => Err(LoginRedirect::Failed(e)),
        }
    }
}

/// Authenticated user for JSON routes.
///
/// Requests without a valid session get 401 `{success: false, message}`.
#[derive(Debug)]
pub struct ApiUser(pub AuthContext);

impl<S> FromRequestParts<S> for ApiUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        authenticate_parts(parts, state)
            .await
            .map(ApiUser)
            .inspect_err(|e| {
                if e.is_unauthenticated() {
                    tracing::warn!(path = %parts.uri.path(), reason = %e, "Unauthorized access");
                }
            })
    }
}

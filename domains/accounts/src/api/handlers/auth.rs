//! Session handlers
//!
//! Implements:
//! - GET/POST /signup - Registration form and submission
//! - GET/POST /login - Login form and session issuance
//! - GET /logout - Session removal

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use jobscout_common::{extractors::ValidatedFormRejection, Error, Result, ValidatedForm};
use jobscout_views::{render, Flash, LoginPage, SignupPage};
use serde::Deserialize;
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::domain::service;

/// Where a successful login lands
pub const LOGIN_LANDING: &str = "/dashboard/1?active_section=home";

/// Registration form
#[derive(Debug, Deserialize, Validate)]
pub struct SignupForm {
    #[validate(length(min = 1, max = 120))]
    pub email: String,
    pub password: String,
}

/// Login form
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// GET /signup
pub async fn signup_page(jar: CookieJar) -> Result<(CookieJar, Html<String>)> {
    let (jar, flash) = Flash::take(jar);
    Ok((jar, render(&SignupPage { flash })?))
}

/// POST /signup - Register and send the user to the login page
pub async fn signup(
    State(state): State<AccountsState>,
    jar: CookieJar,
    form: std::result::Result<ValidatedForm<SignupForm>, ValidatedFormRejection>,
) -> (CookieJar, Redirect) {
    let form = match form {
        Ok(ValidatedForm(form)) => form,
        Err(rejection) => {
            tracing::debug!(?rejection, "Rejected signup form");
            return (Flash::InvalidSignup.set(jar), Redirect::to("/signup"));
        }
    };

    let bcrypt_cost = state.auth.config().bcrypt_cost;
    match service::register(&state.repos, &form.email, &form.password, bcrypt_cost).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "User registered");
            (Flash::Registered.set(jar), Redirect::to("/login"))
        }
        Err(Error::Validation(_)) => (Flash::WeakPassword.set(jar), Redirect::to("/signup")),
        Err(Error::Conflict(_)) => (Flash::EmailTaken.set(jar), Redirect::to("/signup")),
        Err(e) => {
            tracing::error!(error = %e, "Registration failed");
            (Flash::Unexpected.set(jar), Redirect::to("/signup"))
        }
    }
}

/// GET /login
pub async fn login_page(jar: CookieJar) -> Result<(CookieJar, Html<String>)> {
    let (jar, flash) = Flash::take(jar);
    Ok((jar, render(&LoginPage { flash })?))
}

/// POST /login - Establish a session
///
/// Any failure re-renders the form with the same generic message, whether
/// the email is unknown, the password is wrong, or the form is incomplete.
pub async fn login(
    State(state): State<AccountsState>,
    jar: CookieJar,
    form: std::result::Result<ValidatedForm<LoginForm>, ValidatedFormRejection>,
) -> Result<Response> {
    let user = match form {
        Ok(ValidatedForm(form)) => {
            service::authenticate(&state.repos, &form.email, &form.password).await?
        }
        Err(rejection) => {
            tracing::debug!(?rejection, "Rejected login form");
            None
        }
    };

    let Some(user) = user else {
        tracing::warn!("Failed login attempt");
        let page = LoginPage {
            flash: Some(Flash::InvalidCredentials.into()),
        };
        return Ok(render(&page)?.into_response());
    };

    let session = state
        .auth
        .issue_session(user.id)
        .map_err(|e| Error::Internal(e.to_string()))?;
    tracing::info!(user_id = user.id, "User logged in");

    Ok((jar.add(session), Redirect::to(LOGIN_LANDING)).into_response())
}

/// GET /logout - Drop the session and return to the login page
pub async fn logout(State(state): State<AccountsState>, jar: CookieJar) -> (CookieJar, Redirect) {
    let user_id = state.auth.session_user_id(&jar);
    tracing::info!(user_id = ?user_id, "User logged out");
    (
        jar.remove(state.auth.session_removal()),
        Redirect::to("/login"),
    )
}

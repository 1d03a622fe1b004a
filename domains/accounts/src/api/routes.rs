//! Route definitions for the accounts domain

use axum::{routing::get, Router};

use super::handlers::{auth, profile};
use super::middleware::AccountsState;

/// Create signup/login/logout routes
fn session_routes() -> Router<AccountsState> {
    Router::new()
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
}

/// Create profile routes
fn profile_routes() -> Router<AccountsState> {
    Router::new().route("/profile", get(profile::show_profile).post(profile::update_profile))
}

/// Create all accounts domain routes
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .merge(session_routes())
        .merge(profile_routes())
}

//! Profile handlers
//!
//! Implements:
//! - GET /profile - Show the skills editor
//! - POST /profile - Overwrite the user's skills

use axum::{extract::State, response::Html, Form};
use axum_extra::extract::cookie::CookieJar;
use jobscout_auth::AuthUser;
use jobscout_common::Result;
use jobscout_views::{render, DashboardPage, Flash, FlashView, SearchFormView};
use serde::Deserialize;

use crate::api::middleware::AccountsState;
use crate::domain::service;

/// Profile update form; a missing `skills` field clears the stored value.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub skills: Option<String>,
}

fn profile_page(email: String, skills: String, flash: Option<FlashView>) -> DashboardPage {
    DashboardPage {
        flash,
        user_email: email,
        skills,
        active_section: "profile".to_string(),
        profile: true,
        search: SearchFormView::default(),
        jobs: Vec::new(),
        no_jobs: false,
        saved_jobs: Vec::new(),
        pagination: None,
    }
}

/// GET /profile
pub async fn show_profile(
    AuthUser(ctx): AuthUser,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    let (jar, flash) = Flash::take(jar);
    let page = profile_page(ctx.user.email.clone(), ctx.skills().to_string(), flash);
    Ok((jar, render(&page)?))
}

/// POST /profile
pub async fn update_profile(
    State(state): State<AccountsState>,
    AuthUser(ctx): AuthUser,
    Form(form): Form<ProfileForm>,
) -> Result<Html<String>> {
    let user_id = ctx.user_id();
    service::update_skills(&state.repos, user_id, form.skills.as_deref()).await?;
    tracing::info!(user_id, "Profile updated");

    let page = profile_page(
        ctx.user.email,
        form.skills.unwrap_or_default(),
        Some(Flash::ProfileUpdated.into()),
    );
    render(&page)
}

//! Listing and search handlers
//!
//! Implements:
//! - GET / - Landing page with the first listings
//! - GET /dashboard/{page} - Listing, optionally filtered by query parameters
//! - POST /dashboard/{page} - Search form submission
//! - GET /trends - Dashboard trends section

use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use jobscout_auth::{AuthContext, AuthUser};
use jobscout_common::Result;
use jobscout_views::{render, DashboardPage, Flash, IndexPage, PaginationView, SearchFormView};
use serde::Deserialize;

use crate::api::middleware::JobsState;
use crate::domain::saved;
use crate::domain::search::JobSearch;

/// Number of listings on the landing page
pub const TOP_JOBS_LIMIT: i64 = 5;

/// Search filters plus dashboard navigation, from either the query string
/// or the search form.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    #[serde(default)]
    pub skill: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub experience: String,
    pub active_section: Option<String>,
    pub show_available: Option<String>,
}

impl DashboardParams {
    fn search(&self) -> JobSearch {
        if self.show_available.is_some() {
            return JobSearch::default();
        }
        JobSearch::new(&self.skill, &self.location, &self.job_type, &self.experience)
    }
}

/// GET /
pub async fn index(State(state): State<JobsState>, jar: CookieJar) -> Result<Html<String>> {
    let top_jobs = state.repos.jobs.top_jobs(TOP_JOBS_LIMIT).await?;
    let page = IndexPage {
        top_jobs: top_jobs.into_iter().map(|job| job.into_card(false)).collect(),
        logged_in: state.auth.session_user_id(&jar).is_some(),
    };
    render(&page)
}

/// GET /dashboard/{page}
pub async fn dashboard(
    State(state): State<JobsState>,
    AuthUser(ctx): AuthUser,
    Path(page): Path<u32>,
    jar: CookieJar,
    Query(params): Query<DashboardParams>,
) -> Result<(CookieJar, Html<String>)> {
    let active_section = params
        .active_section
        .clone()
        .unwrap_or_else(|| "home".to_string());
    render_dashboard(&state, ctx, jar, page, params.search(), active_section).await
}

/// POST /dashboard/{page}
pub async fn dashboard_search(
    State(state): State<JobsState>,
    AuthUser(ctx): AuthUser,
    Path(page): Path<u32>,
    jar: CookieJar,
    Form(params): Form<DashboardParams>,
) -> Result<(CookieJar, Html<String>)> {
    let active_section = params
        .active_section
        .clone()
        .unwrap_or_else(|| "search".to_string());
    let search = params.search();
    tracing::info!(
        user_id = ctx.user_id(),
        skill = ?search.skill,
        location = ?search.location,
        job_type = ?search.job_type,
        experience = ?search.experience,
        show_available = params.show_available.is_some(),
        "Search query received"
    );
    render_dashboard(&state, ctx, jar, page, search, active_section).await
}

async fn render_dashboard(
    state: &JobsState,
    ctx: AuthContext,
    jar: CookieJar,
    page: u32,
    search: JobSearch,
    active_section: String,
) -> Result<(CookieJar, Html<String>)> {
    let user_id = ctx.user_id();
    let saved_ids = saved::saved_job_ids(&state.repos, user_id).await?;
    let saved_jobs = saved::jobs_for_saved_ids(&state.repos, &saved_ids).await?;
    tracing::debug!(user_id, saved = saved_ids.len(), "Loaded saved jobs");

    let results = state.repos.jobs.search(&search, page).await?;
    tracing::info!(
        user_id,
        page = results.page,
        total = results.total,
        returned = results.items.len(),
        "Search returned jobs"
    );

    let pagination = PaginationView::from_page(&results, "/dashboard", search.to_query_string());
    let no_jobs = results.is_empty();
    let jobs = results
        .items
        .into_iter()
        .map(|job| {
            let is_saved = saved_ids.contains(&job.job_id);
            job.into_card(is_saved)
        })
        .collect();

    let (jar, flash) = Flash::take(jar);
    let page = DashboardPage {
        flash,
        skills: ctx.skills().to_string(),
        user_email: ctx.user.email,
        active_section,
        profile: false,
        search: SearchFormView {
            skill: search.skill.unwrap_or_default(),
            location: search.location.unwrap_or_default(),
            job_type: search.job_type.unwrap_or_default(),
            experience: search.experience.unwrap_or_default(),
        },
        jobs,
        no_jobs,
        saved_jobs: saved_jobs.into_iter().map(|job| job.into_card(true)).collect(),
        pagination: Some(pagination),
    };
    Ok((jar, render(&page)?))
}

/// GET /trends
pub async fn trends(AuthUser(ctx): AuthUser) -> Redirect {
    tracing::debug!(user_id = ctx.user_id(), "Opening trends");
    Redirect::to("/dashboard/1?active_section=trends")
}

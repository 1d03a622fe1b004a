//! Route definitions for the jobs domain

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{jobs, saved};
use super::middleware::JobsState;

/// Create listing and search routes
fn listing_routes() -> Router<JobsState> {
    Router::new()
        .route("/", get(jobs::index))
        .route(
            "/dashboard/{page}",
            get(jobs::dashboard).post(jobs::dashboard_search),
        )
        .route("/trends", get(jobs::trends))
}

/// Create saved-job routes
fn saved_routes() -> Router<JobsState> {
    Router::new()
        .route("/save_job/{job_id}", post(saved::save_job))
        .route("/unsave_job/{job_id}", post(saved::unsave_job))
        .route("/saved_jobs/{page}", get(saved::saved_jobs))
}

/// Create all jobs domain routes
pub fn routes() -> Router<JobsState> {
    Router::new().merge(listing_routes()).merge(saved_routes())
}

//! Saved-job handlers
//!
//! Implements:
//! - POST /save_job/{job_id} - Bookmark a job (JSON)
//! - POST /unsave_job/{job_id} - Remove a bookmark (JSON)
//! - GET /saved_jobs/{page} - Paginated saved jobs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use jobscout_auth::{ApiUser, AuthUser};
use jobscout_common::Result;
use jobscout_views::{render, PaginationView, SavedJobsPage};
use serde::Serialize;

use crate::api::middleware::JobsState;
use crate::domain::saved::{self, SaveOutcome};

/// JSON body for save/unsave responses
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for SaveOutcome {
    fn into_response(self) -> Response {
        let status = if self.is_success() {
            StatusCode::OK
        } else if self.is_server_failure() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::BAD_REQUEST
        };
        let body = SaveResponse {
            success: self.is_success(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

fn parse_job_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// POST /save_job/{job_id}
pub async fn save_job(
    State(state): State<JobsState>,
    ApiUser(ctx): ApiUser,
    Path(job_id): Path<String>,
) -> SaveOutcome {
    let Some(job_id) = parse_job_id(&job_id) else {
        tracing::debug!(raw = %job_id, "Rejected non-numeric job id");
        return SaveOutcome::InvalidJobId;
    };
    saved::save(&state.repos, ctx.user_id(), job_id).await
}

/// POST /unsave_job/{job_id}
pub async fn unsave_job(
    State(state): State<JobsState>,
    ApiUser(ctx): ApiUser,
    Path(job_id): Path<String>,
) -> SaveOutcome {
    let Some(job_id) = parse_job_id(&job_id) else {
        tracing::debug!(raw = %job_id, "Rejected non-numeric job id");
        return SaveOutcome::InvalidJobId;
    };
    saved::unsave(&state.repos, ctx.user_id(), job_id).await
}

/// GET /saved_jobs/{page}
pub async fn saved_jobs(
    State(state): State<JobsState>,
    AuthUser(ctx): AuthUser,
    Path(page): Path<u32>,
) -> Result<Html<String>> {
    let user_id = ctx.user_id();
    let results = saved::list_saved_page(&state.repos, user_id, page).await?;
    tracing::info!(
        user_id,
        page = results.page,
        total = results.total,
        "Listing saved jobs"
    );

    let pagination = PaginationView::from_page(&results, "/saved_jobs", String::new());
    let view = SavedJobsPage {
        saved_jobs: results
            .items
            .into_iter()
            .map(|job| job.into_card(true))
            .collect(),
        pagination,
    };
    render(&view)
}

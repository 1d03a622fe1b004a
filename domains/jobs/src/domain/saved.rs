//! Saved-jobs workflows
//!
//! Saves and unsaves run in a transaction that is rolled back explicitly on
//! any failure. Their results are [`SaveOutcome`]s rather than errors: every
//! case, failures included, maps to a message for the client.

use jobscout_common::{db, Page, RepositoryError, Result};
use sqlx::{Postgres, Transaction};

use crate::domain::entities::Job;
use crate::repository::{
    delete_saved_job_tx, insert_saved_job_tx, saved_job_exists_tx, JobsRepositories,
};

/// Result of a save or unsave request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
    SaveFailed(String),
    Unsaved,
    NotSaved,
    UnsaveFailed(String),
    InvalidJobId,
}

impl SaveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SaveOutcome::Saved | SaveOutcome::Unsaved)
    }

    /// Whether the request failed on the server's side rather than the client's
    pub fn is_server_failure(&self) -> bool {
        matches!(self, SaveOutcome::SaveFailed(_) | SaveOutcome::UnsaveFailed(_))
    }

    pub fn message(&self) -> String {
        match self {
            SaveOutcome::Saved => "Job saved successfully!".to_string(),
            SaveOutcome::AlreadySaved => "Job already saved.".to_string(),
            SaveOutcome::SaveFailed(e) => format!("Failed to save job: {}", e),
            SaveOutcome::Unsaved => "Job unsaved successfully!".to_string(),
            SaveOutcome::NotSaved => "Job not found in saved jobs.".to_string(),
            SaveOutcome::UnsaveFailed(e) => format!("Failed to unsave job: {}", e),
            SaveOutcome::InvalidJobId => "Invalid job id.".to_string(),
        }
    }
}

/// Bookmark `job_id` for the user.
pub async fn save(repos: &JobsRepositories, user_id: i64, job_id: i64) -> SaveOutcome {
    let mut tx = match repos.begin().await {
        Ok(tx) => tx,
        Err(e) => {
            tracing::error!(error = %e, user_id, job_id, "Failed to begin save transaction");
            return SaveOutcome::SaveFailed(e.to_string());
        }
    };

    match insert_if_absent(&mut tx, user_id, job_id).await {
        Ok(true) => match tx.commit().await {
            Ok(()) => {
                tracing::info!(user_id, job_id, "Job saved");
                SaveOutcome::Saved
            }
            Err(e) => {
                tracing::error!(error = %e, user_id, job_id, "Failed to commit saved job");
                SaveOutcome::SaveFailed(e.to_string())
            }
        },
        Ok(false) => {
            db::rollback(tx).await;
            tracing::info!(user_id, job_id, "Job already saved");
            SaveOutcome::AlreadySaved
        }
        Err(RepositoryError::AlreadyExists) => {
            db::rollback(tx).await;
            tracing::info!(user_id, job_id, "Concurrent duplicate save");
            SaveOutcome::AlreadySaved
        }
        Err(e) => {
            db::rollback(tx).await;
            tracing::error!(error = %e, user_id, job_id, "Failed to save job");
            SaveOutcome::SaveFailed(e.to_string())
        }
    }
}

/// Returns `false` when the pair was already saved.
async fn insert_if_absent(
    tx: &mut Transaction<'_, Postgres>,
    user_id: i64,
    job_id: i64,
) -> std::result::Result<bool, RepositoryError> {
    if saved_job_exists_tx(tx, user_id, job_id).await? {
        return Ok(false);
    }
    insert_saved_job_tx(tx, user_id, job_id).await?;
    Ok(true)
}

/// Remove the user's bookmark of `job_id`.
pub async fn unsave(repos: &JobsRepositories, user_id: i64, job_id: i64) -> SaveOutcome {
    let mut tx = match repos.begin().await {
        Ok(tx) => tx,
        Err(e) => {
            tracing::error!(error = %e, user_id, job_id, "Failed to begin unsave transaction");
            return SaveOutcome::UnsaveFailed(e.to_string());
        }
    };

    match delete_saved_job_tx(&mut tx, user_id, job_id).await {
        Ok(()) => match tx.commit().await {
            Ok(()) => {
                tracing::info!(user_id, job_id, "Job unsaved");
                SaveOutcome::Unsaved
            }
            Err(e) => {
                tracing::error!(error = %e, user_id, job_id, "Failed to commit unsave");
                SaveOutcome::UnsaveFailed(e.to_string())
            }
        },
        Err(RepositoryError::NotFound) => {
            db::rollback(tx).await;
            tracing::info!(user_id, job_id, "Job not found in saved jobs");
            SaveOutcome::NotSaved
        }
        Err(e) => {
            db::rollback(tx).await;
            tracing::error!(error = %e, user_id, job_id, "Failed to unsave job");
            SaveOutcome::UnsaveFailed(e.to_string())
        }
    }
}

/// External ids of every job the user has saved
pub async fn saved_job_ids(repos: &JobsRepositories, user_id: i64) -> Result<Vec<i64>> {
    repos.saved_jobs.job_ids_for_user(user_id).await
}

/// Jobs matching already-fetched saved ids; no query when there are none.
pub async fn jobs_for_saved_ids(repos: &JobsRepositories, job_ids: &[i64]) -> Result<Vec<Job>> {
    if job_ids.is_empty() {
        return Ok(Vec::new());
    }
    repos.jobs.find_by_job_ids(job_ids).await
}

/// Every saved job that still exists in the catalogue
pub async fn list_saved(repos: &JobsRepositories, user_id: i64) -> Result<Vec<Job>> {
    let job_ids = saved_job_ids(repos, user_id).await?;
    jobs_for_saved_ids(repos, &job_ids).await
}

/// One page of the user's saved jobs, newest first.
pub async fn list_saved_page(
    repos: &JobsRepositories,
    user_id: i64,
    page: u32,
) -> Result<Page<Job>> {
    let job_ids = saved_job_ids(repos, user_id).await?;
    if job_ids.is_empty() {
        return Ok(Page::empty(page));
    }
    repos.jobs.page_by_job_ids(&job_ids, page).await
}

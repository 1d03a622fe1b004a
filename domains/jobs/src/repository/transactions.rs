//! Transactional free functions for the jobs domain

use crate::domain::entities::SavedJob;
use jobscout_common::RepositoryError;
use sqlx::{Postgres, Transaction};

/// Whether the user has already saved `job_id`.
pub async fn saved_job_exists_tx(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: i64,
    job_id: i64,
) -> std::result::Result<bool, RepositoryError> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM saved_jobs WHERE user_id = $1 AND job_id = $2
        )
        "#,
    )
    .bind(user_id)
    .bind(job_id)
    .fetch_one(&mut **transaction)
    .await?;
    Ok(exists)
}

/// Insert a saved job within an existing transaction.
///
/// Returns `RepositoryError::AlreadyExists` if a concurrent request saved the
/// same pair first.
pub async fn insert_saved_job_tx(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: i64,
    job_id: i64,
) -> std::result::Result<SavedJob, RepositoryError> {
    sqlx::query_as::<_, SavedJob>(
        r#"
        INSERT INTO saved_jobs (user_id, job_id)
        VALUES ($1, $2)
        RETURNING id, job_id, user_id
        "#,
    )
    .bind(user_id)
    .bind(job_id)
    .fetch_one(&mut **transaction)
    .await
    .map_err(RepositoryError::from_sqlx)
}

/// Delete a saved job within an existing transaction.
///
/// Returns `RepositoryError::NotFound` if the user never saved `job_id`.
pub async fn delete_saved_job_tx(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: i64,
    job_id: i64,
) -> std::result::Result<(), RepositoryError> {
    let result = sqlx::query(
        r#"
        DELETE FROM saved_jobs
        WHERE user_id = $1 AND job_id = $2
        "#,
    )
    .bind(user_id)
    .bind(job_id)
    .execute(&mut **transaction)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}

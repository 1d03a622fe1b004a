//! Saved job repository (reads)

use jobscout_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct SavedJobRepository {
    pool: PgPool,
}

impl SavedJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// External job ids the user has saved, oldest save first
    pub async fn job_ids_for_user(&self, user_id: i64) -> Result<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT job_id
            FROM saved_jobs
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }
}

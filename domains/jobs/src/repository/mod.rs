//! Repository implementations for the jobs domain

pub mod jobs;
pub mod saved_jobs;
pub mod transactions;

use sqlx::{PgPool, Postgres, Transaction};

pub use jobs::JobRepository;
pub use saved_jobs::SavedJobRepository;
pub use transactions::{delete_saved_job_tx, insert_saved_job_tx, saved_job_exists_tx};

/// Combined repository access for the jobs domain
#[derive(Clone)]
pub struct JobsRepositories {
    pool: PgPool,
    pub jobs: JobRepository,
    pub saved_jobs: SavedJobRepository,
}

impl JobsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            jobs: JobRepository::new(pool.clone()),
            saved_jobs: SavedJobRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

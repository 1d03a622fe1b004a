//! Job repository
//!
//! The jobs table is owned by the external importer; this repository only
//! reads it.

use crate::domain::entities::Job;
use crate::domain::search::JobSearch;
use jobscout_common::{pagination::offset_for, Page, Result, PER_PAGE};
use sqlx::{PgPool, Postgres, QueryBuilder};

const JOB_COLUMNS: &str =
    "id, job_id, title, company_name, location, remote_allowed, experience_level, skills_desc";

fn search_count_query(search: &JobSearch) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("SELECT COUNT(*) FROM jobs WHERE TRUE");
    search.push_filters(&mut query);
    query
}

fn search_page_query(search: &JobSearch, page: u32) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {} FROM jobs WHERE TRUE", JOB_COLUMNS));
    search.push_filters(&mut query);
    query
        .push(" ORDER BY id DESC LIMIT ")
        .push_bind(i64::from(PER_PAGE))
        .push(" OFFSET ")
        .push_bind(offset_for(page, PER_PAGE));
    query
}

#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The first `limit` jobs in insertion order
    pub async fn top_jobs(&self, limit: i64) -> Result<Vec<Job>> {
        let rows = sqlx::query_as::<_, Job>(&format!(
            "SELECT {} FROM jobs ORDER BY id ASC LIMIT $1",
            JOB_COLUMNS
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// One page of jobs matching the filters, newest first.
    ///
    /// A page past the end yields no items rather than an error.
    pub async fn search(&self, search: &JobSearch, page: u32) -> Result<Page<Job>> {
        let mut count = search_count_query(search);
        let total = count.build_query_scalar::<i64>().fetch_one(&self.pool).await?;

        let mut items = search_page_query(search, page);
        tracing::debug!(sql = items.sql(), "Executing job search");
        let rows = items.build_query_as::<Job>().fetch_all(&self.pool).await?;

        Ok(Page::new(rows, page, PER_PAGE, total))
    }

    /// Jobs whose external id is in `job_ids`, newest first
    pub async fn find_by_job_ids(&self, job_ids: &[i64]) -> Result<Vec<Job>> {
        let rows = sqlx::query_as::<_, Job>(&format!(
            "SELECT {} FROM jobs WHERE job_id = ANY($1) ORDER BY id DESC",
            JOB_COLUMNS
        ))
        .bind(job_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// One page of the jobs whose external id is in `job_ids`, newest first
    pub async fn page_by_job_ids(&self, job_ids: &[i64], page: u32) -> Result<Page<Job>> {
        let total: i64 =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs WHERE job_id = ANY($1)")
                .bind(job_ids)
                .fetch_one(&self.pool)
                .await?;

        let rows = sqlx::query_as::<_, Job>(&format!(
            "SELECT {} FROM jobs WHERE job_id = ANY($1) ORDER BY id DESC LIMIT $2 OFFSET $3",
            JOB_COLUMNS
        ))
        .bind(job_ids)
        .bind(i64::from(PER_PAGE))
        .bind(offset_for(page, PER_PAGE))
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(rows, page, PER_PAGE, total))
    }
}

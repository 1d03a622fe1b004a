//! Common test utilities and fixtures for integration tests
//!
//! This module provides shared infrastructure for all integration tests:
//! - Test database setup and cleanup
//! - Session helpers
//! - User and job fixtures
//! - Request builders

use std::env;
use std::sync::Once;

use anyhow::Result;
use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
        Request, Response,
    },
    Router,
};
use jobscout_accounts::AccountsRepositories;
use jobscout_auth::{AuthBackend, AuthConfig};
use jobscout_jobs::JobsRepositories;
use sqlx::PgPool;
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Lowest bcrypt cost, to keep registration fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Password that satisfies the policy
pub const STRONG_PASSWORD: &str = "Abcdefgh1";

/// Test environment configuration
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub database_url: String,
    pub session_secret: String,
}

impl TestConfig {
    /// `None` when no test database is configured.
    pub fn from_env() -> Option<Self> {
        INIT.call_once(|| {
            dotenvy::from_filename(".env.test").ok();
        });

        let database_url = env::var("TEST_DATABASE_URL").ok()?;
        Some(Self {
            database_url,
            session_secret: env::var("TEST_SESSION_SECRET")
                .unwrap_or_else(|_| "test_secret_key_for_testing_only".to_string()),
        })
    }
}

/// Test application with a migrated, emptied database
pub struct TestApp {
    pub config: TestConfig,
    pub pool: PgPool,
    pub auth: AuthBackend,
    pub accounts: AccountsRepositories,
    pub jobs: JobsRepositories,
    data_dir: TempDir,
}

/// Build a `TestApp`, or return from the test when no database is configured.
macro_rules! test_app {
    () => {
        match $crate::common::TestApp::new().await.expect("test app setup") {
            Some(app) => app,
            None => {
                eprintln!("TEST_DATABASE_URL not set; skipping");
                return;
            }
        }
    };
}
pub(crate) use test_app;

impl TestApp {
    pub async fn new() -> Result<Option<Self>> {
        let Some(config) = TestConfig::from_env() else {
            return Ok(None);
        };

        let pool = PgPool::connect(&config.database_url).await?;
        jobscout_app::MIGRATOR.run(&pool).await?;

        let mut auth_config = AuthConfig::new(config.session_secret.clone());
        auth_config.bcrypt_cost = TEST_BCRYPT_COST;

        let app = TestApp {
            auth: AuthBackend::new(pool.clone(), auth_config),
            accounts: AccountsRepositories::new(pool.clone()),
            jobs: JobsRepositories::new(pool.clone()),
            data_dir: tempfile::tempdir()?,
            config,
            pool,
        };
        app.cleanup().await?;
        Ok(Some(app))
    }

    /// Remove every row the tests may have created
    pub async fn cleanup(&self) -> Result<()> {
        sqlx::query("TRUNCATE saved_jobs, users, jobs RESTART IDENTITY CASCADE")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// The full application router over this test database
    pub fn router(&self) -> Router {
        let data_dir = self.data_dir.path().to_str().unwrap_or(".");
        jobscout_app::build_router(self.auth.clone(), self.pool.clone(), data_dir)
    }

    /// Register a user through the accounts service and return its id
    pub async fn create_user(&self, email: &str) -> Result<i64> {
        let user = jobscout_accounts::service::register(
            &self.accounts,
            email,
            STRONG_PASSWORD,
            TEST_BCRYPT_COST,
        )
        .await?;
        Ok(user.id)
    }

    /// `Cookie` header value carrying a session for `user_id`
    pub fn session_for(&self, user_id: i64) -> Result<String> {
        let cookie = self.auth.issue_session(user_id)?;
        Ok(format!("{}={}", cookie.name(), cookie.value()))
    }

    /// Insert a job row as the importer would; returns the external job id
    pub async fn insert_job(&self, job: TestJob<'_>) -> Result<i64> {
        sqlx::query(
            r#"
            INSERT INTO jobs (job_id, title, company_name, location, remote_allowed,
                              experience_level, skills_desc)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(job.job_id)
        .bind(job.title)
        .bind("Acme")
        .bind(job.location)
        .bind(job.remote_allowed)
        .bind(job.experience_level)
        .bind(job.skills_desc)
        .execute(&self.pool)
        .await?;
        Ok(job.job_id)
    }

    pub async fn count_saved(&self, user_id: i64) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM saved_jobs WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    pub async fn count_all_saved(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM saved_jobs")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Job fixture
#[derive(Debug, Clone, Copy)]
pub struct TestJob<'a> {
    pub job_id: i64,
    pub title: &'a str,
    pub location: &'a str,
    pub remote_allowed: bool,
    pub experience_level: &'a str,
    pub skills_desc: &'a str,
}

impl<'a> TestJob<'a> {
    pub fn new(job_id: i64, skills_desc: &'a str) -> Self {
        Self {
            job_id,
            title: "Engineer",
            location: "Berlin, Germany",
            remote_allowed: false,
            experience_level: "Entry level",
            skills_desc,
        }
    }
}

/// Helper: build a form POST, optionally with a cookie
pub fn form_request(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(uri).header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Helper: build a GET or bodiless POST, optionally with a cookie
pub fn request(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// Helper: every `Set-Cookie` header as a string
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}

/// Helper: `name=value` of the first `Set-Cookie` for `name`
pub fn cookie_pair(response: &Response<Body>, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    set_cookies(response)
        .into_iter()
        .find(|c| c.starts_with(&prefix))
        .and_then(|c| c.split(';').next().map(str::to_string))
}

/// Helper: response body as text
pub async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Helper: parse response body as JSON Value
pub async fn parse_body(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

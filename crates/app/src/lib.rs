//! JobScout application composition root
//!
//! Composes all domain routers into a single application.

use axum::{extract::State, response::Html, routing::get, Router};
use axum_extra::extract::cookie::CookieJar;
use jobscout_accounts::{AccountsRepositories, AccountsState};
use jobscout_auth::{AuthBackend, AuthConfig};
use jobscout_common::Config;
use jobscout_jobs::{JobsRepositories, JobsState};
use jobscout_views::{render, ServicesPage};
use sqlx::{migrate::Migrator, PgPool};
use tower_http::services::ServeDir;

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Create the main application router with all routes
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    if !std::path::Path::new(&config.data_dir).is_dir() {
        tracing::warn!(data_dir = %config.data_dir, "Data directory does not exist; /data will return 404");
    }
    let auth = AuthBackend::new(pool.clone(), AuthConfig::from_config(config));
    build_router(auth, pool, &config.data_dir)
}

/// Router over an already-configured auth backend
pub fn build_router(auth: AuthBackend, pool: PgPool, data_dir: &str) -> Router {
    let accounts_state = AccountsState {
        repos: AccountsRepositories::new(pool.clone()),
        auth: auth.clone(),
    };
    let jobs_state = JobsState {
        repos: JobsRepositories::new(pool),
        auth: auth.clone(),
    };

    let shared = Router::new()
        .route("/services", get(services))
        .with_state(auth);

    Router::new()
        .route("/health", get(health_check))
        .merge(shared)
        .merge(jobscout_accounts::routes().with_state(accounts_state))
        .merge(jobscout_jobs::routes().with_state(jobs_state))
        .nest_service("/data", ServeDir::new(data_dir))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// GET /services
async fn services(
    State(auth): State<AuthBackend>,
    jar: CookieJar,
) -> jobscout_common::Result<Html<String>> {
    render(&ServicesPage {
        logged_in: auth.session_user_id(&jar).is_some(),
    })
}

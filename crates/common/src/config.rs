//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Log output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,
    pub database_max_connections: u32,
    pub run_migrations: bool,

    /// Session signing
    pub session_secret: String,
    pub session_ttl_hours: i64,
    pub cookie_secure: bool,

    /// Directory served under `/data`
    pub data_dir: String,

    /// Runtime configuration
    pub log_format: LogFormat,
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,
            database_max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 10),
            run_migrations: parse_or("RUN_MIGRATIONS", true),

            session_secret: env::var("SESSION_SECRET")
                .map_err(|_| anyhow::anyhow!("SESSION_SECRET is required"))?,
            session_ttl_hours: parse_or("SESSION_TTL_HOURS", 24),
            cookie_secure: parse_or("COOKIE_SECURE", false),

            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),

            log_format: env::var("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
            rust_log: env::var("RUST_LOG")
                .unwrap_or_else(|_| "jobscout=debug,tower_http=info".to_string()),
            port: parse_or("PORT", 5000),
        };

        if config.session_secret.trim().is_empty() {
            anyhow::bail!("SESSION_SECRET must not be empty");
        }

        Ok(config)
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when it is unset or unparsable.
fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

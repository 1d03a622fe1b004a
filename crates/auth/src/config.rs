//! Authentication configuration

use jobscout_common::Config;

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub session_secret: String,
    pub session_ttl_hours: i64,
    pub cookie_secure: bool,
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    pub fn new(session_secret: impl Into<String>) -> Self {
        Self {
            session_secret: session_secret.into(),
            session_ttl_hours: 24,
            cookie_secure: false,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            session_secret: config.session_secret.clone(),
            session_ttl_hours: config.session_ttl_hours,
            cookie_secure: config.cookie_secure,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

//! Authentication for JobScout
//!
//! Provides signed session cookies, bcrypt password hashing, and axum
//! extractors that work with any domain state implementing `FromRef<S>`
//! for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;
pub mod password;
mod types;

pub use backend::{AuthBackend, SESSION_COOKIE};
pub use claims::SessionClaims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::{ApiUser, AuthUser, LoginRedirect};
pub use types::AuthIdentity;

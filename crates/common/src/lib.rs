//! Shared utilities, configuration, and error handling for JobScout
//!
//! This crate provides common functionality used across the JobScout application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Pagination over ordered result sets
//! - Validated form extraction

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod pagination;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::ValidatedForm;
pub use pagination::{Page, PageLink, PER_PAGE};

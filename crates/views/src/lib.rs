//! HTML views for JobScout page routes
//!
//! Askama templates live in `templates/` next to this crate's manifest and
//! are compiled into the binary. Handlers build one of the page structs in
//! [`pages`] and hand it to [`render`].

pub mod flash;
pub mod pages;

use askama::Template;
use axum::response::Html;
use jobscout_common::{Error, Result};

pub use flash::{Flash, FlashLevel, FlashView, FLASH_COOKIE};
pub use pages::{
    DashboardPage, IndexPage, JobCard, LoginPage, PaginationView, SavedJobsPage, SearchFormView,
    ServicesPage, SignupPage,
};

/// Render a template into an HTML response body
pub fn render<T: Template>(template: &T) -> Result<Html<String>> {
    template.render().map(Html).map_err(|e| {
        tracing::error!(error = %e, "Template rendering failed");
        Error::Internal(format!("Template rendering failed: {}", e))
    })
}

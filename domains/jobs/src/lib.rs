//! Jobs domain: job search, saved jobs

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use domain::saved::{self, SaveOutcome};
pub use domain::search::JobSearch;

// Re-export repository types
pub use repository::{
    delete_saved_job_tx, insert_saved_job_tx, saved_job_exists_tx, JobRepository,
    JobsRepositories, SavedJobRepository,
};

// Re-export API types
pub use api::routes;
pub use api::JobsState;

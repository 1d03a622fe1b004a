//! Accounts domain: registration, login sessions, profile skills

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use domain::service;

// Re-export repository types
pub use repository::{create_user_tx, update_skills_tx, AccountsRepositories, UserRepository};

// Re-export API types
pub use api::routes;
pub use api::AccountsState;

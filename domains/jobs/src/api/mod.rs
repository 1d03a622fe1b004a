//! API layer for the jobs domain
//!
//! Page and JSON handlers, routes, and the domain state.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::JobsState;
pub use routes::routes;

//! Domain layer for jobs

pub mod entities;
pub mod saved;
pub mod search;

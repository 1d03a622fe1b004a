//! HTTP handlers for the jobs domain

pub mod jobs;
pub mod saved;

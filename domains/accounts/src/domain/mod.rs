//! Domain layer for accounts

pub mod entities;
pub mod service;

//! Articles Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
/// Article models and the data access service
pub mod articles;
pub mod config;
pub mod error;
pub mod sanitize;

//! Shared configuration, error and role types for the campus portal.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

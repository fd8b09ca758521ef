//! Portal services: mock authentication, role-driven navigation and the
//! derived dashboard data built from the compiled-in catalog.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod portal;

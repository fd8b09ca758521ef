//! HTTP surface of the campus portal.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod portal_handler;

#[cfg(test)]
mod test_support;

pub mod auth;
pub mod page_access;

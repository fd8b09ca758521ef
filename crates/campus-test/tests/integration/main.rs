//! Cross-crate integration tests: the full router over a real session store.

mod helpers;
mod persistence;
mod portal_flow;
mod role_access;

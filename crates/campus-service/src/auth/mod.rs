//! Mock authentication: a fixed account directory, a session persisted in a
//! key-value store, and the page guard deciding which roles see which pages.

pub mod casbin;
pub mod directory;
pub mod password;
pub mod session;
pub mod store;

pub use casbin::PageGuard;
pub use directory::AccountDirectory;
pub use session::{AuthService, Session};
pub use store::{FileStore, KeyValueStore, MemoryStore};

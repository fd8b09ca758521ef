/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";
pub const APP_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", APP_ROUTE_COMPONENT);

/// Key-value entries that make up a persisted session.
pub const USER_STORAGE_KEY: &str = "user";
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// Prefix of every synthetic session token.
pub const TOKEN_PREFIX: &str = "demo-token";

/// Shared password of the demo accounts.
pub const DEMO_PASSWORD: &str = "demo123";

/// Page every signed-in role may open regardless of its navigation.
pub const PROFILE_PAGE: &str = "/profile";

#![allow(clippy::unwrap_used)]
//! Shared setup for handler tests.

use std::sync::Arc;

use campus_core::config::Settings;
use campus_core::types::Role;
use campus_service::auth::AuthService;
use salvo::Service;

use crate::app::api::build_router;

pub fn url(path: &str) -> String {
    format!("http://127.0.0.1:5800{path}")
}

/// The full router over an in-memory session store with no simulated latency.
pub struct TestPortal {
    pub service: Service,
    pub auth: Arc<AuthService>,
}

impl TestPortal {
    pub async fn new() -> Self {
        let mut settings = Settings::default();
        settings.auth.login_delay_ms = 0;
        settings.auth.logout_delay_ms = 0;

        let auth = Arc::new(AuthService::from_settings(&settings).unwrap());
        let router = build_router(&settings, auth.clone()).await.unwrap();
        Self {
            service: Service::new(router),
            auth,
        }
    }

    pub async fn signed_in_as(email: &str, role: Role) -> Self {
        let portal = Self::new().await;
        portal.auth.login(email, "demo123", role).await.unwrap();
        portal
    }
}

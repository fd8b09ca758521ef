#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Building the full portal service over a file-backed session store
//! - Making JSON requests and reading JSON responses

use std::path::{Path, PathBuf};
use std::sync::Arc;

use salvo::http::StatusCode;
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};
use serde_json::{Value, json};

use campus_test::app::api::build_router;
use campus_test::component::auth::AuthService;
use campus_test::component::config::Settings;

pub use tracing;

/// A portal instance whose session lives in a temporary JSON file.
pub struct TestPortal {
    pub service: Service,
    pub auth: Arc<AuthService>,
    pub settings: Settings,
    store_path: PathBuf,
    dir: Arc<tempfile::TempDir>,
}

/// Settings with no simulated latency and a session file at `path`.
#[must_use]
pub fn test_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.auth.login_delay_ms = 0;
    settings.auth.logout_delay_ms = 0;
    settings.storage.path = Some(path.display().to_string());
    settings
}

impl TestPortal {
    /// ## Panics
    /// Panics if the temporary directory or the router cannot be created.
    pub async fn new() -> Self {
        let dir = Arc::new(tempfile::tempdir().expect("Failed to create temp dir"));
        Self::over(dir, test_settings).await
    }

    async fn over(dir: Arc<tempfile::TempDir>, configure: impl Fn(&Path) -> Settings) -> Self {
        let store_path = dir.path().join("session.json");
        let settings = configure(&store_path);
        let auth = Arc::new(AuthService::from_settings(&settings).expect("Auth service"));
        let router = build_router(&settings, auth.clone())
            .await
            .expect("Router should build");
        Self {
            service: Service::new(router),
            auth,
            settings,
            store_path,
            dir,
        }
    }

    /// A second portal over the same session file, as after a restart.
    pub async fn restarted(&self) -> Self {
        let settings = self.settings.clone();
        Self::over(self.dir.clone(), move |_| settings.clone()).await
    }

    #[must_use]
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let mut res = TestClient::get(format!("http://127.0.0.1:5800{path}"))
            .send(&self.service)
            .await;
        let status = res.status_code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, res.take_json().await.unwrap_or(Value::Null))
    }

    pub async fn post(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let mut res = TestClient::post(format!("http://127.0.0.1:5800{path}"))
            .json(body)
            .send(&self.service)
            .await;
        let status = res.status_code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, res.take_json().await.unwrap_or(Value::Null))
    }

    pub async fn login(&self, email: &str, role: &str) -> (StatusCode, Value) {
        self.post(
            "/api/app/auth/login",
            &json!({"email": email, "password": "demo123", "role": role}),
        )
        .await
    }

    pub async fn logout(&self) -> StatusCode {
        self.post("/api/app/auth/logout", &Value::Null).await.0
    }
}

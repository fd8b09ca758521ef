use salvo::prelude::Json;
use salvo::{Depot, Router, handler};
use serde_json::json;

use crate::middleware::auth::{DepotUser, depot_keys};

/// ## Summary
/// Returns the signed-in user's record as JSON, or a public marker.
/// The user is retrieved from the depot set by the `AuthMiddleware`.
#[handler]
async fn whoami(depot: &Depot) -> Json<serde_json::Value> {
    match depot.get::<DepotUser>(depot_keys::AUTHENTICATED_USER) {
        Ok(val) => match val {
            DepotUser::User(user) => Json(serde_json::to_value(user).unwrap_or(json!(null))),
            DepotUser::Public => Json(json!({"status":"public"})),
        },
        Err(_) => Json(json!({"error":"User not found in depot"})),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("whoami").get(whoami)
}

#[cfg(test)]
mod tests {
    use campus_core::types::Role;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;

    use crate::test_support::{TestPortal, url};

    #[tokio::test]
    async fn public_without_session() {
        let portal = TestPortal::new().await;
        let mut res = TestClient::get(url("/api/app/whoami"))
            .send(&portal.service)
            .await;
        let body: Value = res.take_json().await.unwrap();
        assert_eq!(body["status"], "public");
    }

    #[tokio::test]
    async fn user_record_with_session() {
        let portal = TestPortal::signed_in_as("student@demo.com", Role::Student).await;
        let mut res = TestClient::get(url("/api/app/whoami"))
            .send(&portal.service)
            .await;
        let body: Value = res.take_json().await.unwrap();
        assert_eq!(body["email"], "student@demo.com");
        assert_eq!(body["studentId"], "STU2024001");
    }

    #[tokio::test]
    async fn mismatched_bearer_token_is_public() {
        let portal = TestPortal::signed_in_as("student@demo.com", Role::Student).await;
        let mut res = TestClient::get(url("/api/app/whoami"))
            .bearer_auth("demo-token-9-0")
            .send(&portal.service)
            .await;
        let body: Value = res.take_json().await.unwrap();
        assert_eq!(body["status"], "public");
    }
}

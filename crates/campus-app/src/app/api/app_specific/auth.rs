use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use campus_core::types::Role;

use crate::error::render_error;
use crate::portal_handler::get_auth_from_depot;

/// ## Summary
/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// ## Summary
/// POST /app/auth/login - Signs in one of the demo accounts
///
/// ## Side Effects
/// Persists the user record and a fresh token in the session store.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body, HTTP 401 with the rejection message
/// for bad credentials, and HTTP 500 if the session cannot be stored.
#[handler]
async fn login_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing login request");

    let login_req: LoginRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            error!(error = ?e, "Failed to parse login request");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    if login_req.email.is_empty() || login_req.password.is_empty() {
        render_error(
            res,
            StatusCode::BAD_REQUEST,
            "Email and password are required",
        );
        return;
    }

    let auth = match get_auth_from_depot(depot) {
        Ok(auth) => auth,
        Err(e) => {
            error!(error = ?e, "Failed to get auth service");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            return;
        }
    };

    match auth
        .login(&login_req.email, &login_req.password, login_req.role)
        .await
    {
        Ok(session) => {
            res.status_code(StatusCode::OK);
            res.render(Json(session));
        }
        Err(e) if e.is_credential_error() => {
            render_error(res, StatusCode::UNAUTHORIZED, e.to_string());
        }
        Err(e) => {
            error!(error = ?e, "Login failed");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    }
}

/// ## Summary
/// POST /app/auth/logout - Ends the current session
///
/// ## Errors
/// Returns HTTP 500 if the session store cannot be cleared.
#[handler]
async fn logout_handler(depot: &mut Depot, res: &mut Response) {
    let result = match get_auth_from_depot(depot) {
        Ok(auth) => auth.logout().await.map_err(crate::error::AppError::from),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(e) => {
            error!(error = ?e, "Logout failed");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    }
}

/// ## Summary
/// POST /app/auth/refresh - Returns the current token, minting one if none exists
///
/// ## Errors
/// Returns HTTP 500 if the session store cannot be read or written.
#[handler]
async fn refresh_handler(depot: &mut Depot, res: &mut Response) {
    let result = get_auth_from_depot(depot)
        .and_then(|auth| auth.refresh_token().map_err(crate::error::AppError::from));

    match result {
        Ok(token) => res.render(Json(json!({ "token": token }))),
        Err(e) => {
            error!(error = ?e, "Token refresh failed");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("auth")
        .push(Router::with_path("login").post(login_handler))
        .push(Router::with_path("logout").post(logout_handler))
        .push(Router::with_path("refresh").post(refresh_handler))
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};

    use crate::test_support::{TestPortal, url};

    #[test_log::test(tokio::test)]
    async fn login_returns_user_and_token() {
        let portal = TestPortal::new().await;

        let mut res = TestClient::post(url("/api/app/auth/login"))
            .json(&json!({"email": "admin@demo.com", "password": "demo123", "role": "admin"}))
            .send(&portal.service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        let body: Value = res.take_json().await.unwrap();
        assert_eq!(body["user"]["role"], "admin");
        assert!(body["token"].as_str().unwrap().starts_with("demo-token-3-"));
        assert!(portal.auth.is_authenticated().unwrap());
    }

    #[tokio::test]
    async fn bad_credentials_return_the_message() {
        let portal = TestPortal::new().await;

        let cases = [
            (json!({"email": "x@demo.com", "password": "demo123", "role": "admin"}), "User not found"),
            (json!({"email": "admin@demo.com", "password": "demo123", "role": "student"}), "Please select admin role"),
            (json!({"email": "admin@demo.com", "password": "nope", "role": "admin"}), "Invalid password"),
        ];

        for (body, message) in cases {
            let mut res = TestClient::post(url("/api/app/auth/login"))
                .json(&body)
                .send(&portal.service)
                .await;

            assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
            let body: Value = res.take_json().await.unwrap();
            assert_eq!(body["error"], message);
        }
        assert!(!portal.auth.is_authenticated().unwrap());
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let portal = TestPortal::new().await;

        let res = TestClient::post(url("/api/app/auth/login"))
            .json(&json!({"email": "admin@demo.com", "password": "demo123", "role": "dean"}))
            .send(&portal.service)
            .await;
        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let res = TestClient::post(url("/api/app/auth/login"))
            .json(&json!({"email": "", "password": "", "role": "admin"}))
            .send(&portal.service)
            .await;
        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn logout_ends_the_session() {
        let portal = TestPortal::signed_in_as("teacher@demo.com", campus_core::types::Role::Teacher).await;

        let res = TestClient::post(url("/api/app/auth/logout"))
            .send(&portal.service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
        assert!(!portal.auth.is_authenticated().unwrap());
    }

    #[tokio::test]
    async fn refresh_keeps_the_session_token() {
        let portal = TestPortal::signed_in_as("student@demo.com", campus_core::types::Role::Student).await;
        let token = portal.auth.token().unwrap().unwrap();

        let mut res = TestClient::post(url("/api/app/auth/refresh"))
            .send(&portal.service)
            .await;

        let body: Value = res.take_json().await.unwrap();
        assert_eq!(body["token"], token.as_str());
    }
}

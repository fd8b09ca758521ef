//! The session outlives the process through the file-backed store.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn session_survives_restart() {
    let portal = TestPortal::new().await;
    portal.login("teacher@demo.com", "teacher").await;

    let restarted = portal.restarted().await;
    let (status, body) = restarted.get("/api/app/whoami").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "teacher@demo.com");
}

#[test_log::test(tokio::test)]
async fn session_file_holds_user_and_token() {
    let portal = TestPortal::new().await;
    let (_, body) = portal.login("admin@demo.com", "admin").await;

    let text = std::fs::read_to_string(portal.store_path()).expect("session file");
    let stored: serde_json::Value = serde_json::from_str(&text).expect("session JSON");
    assert_eq!(stored["auth_token"], body["token"]);
    let user: serde_json::Value =
        serde_json::from_str(stored["user"].as_str().expect("user blob")).expect("user JSON");
    assert_eq!(user["id"], "3");
}

#[test_log::test(tokio::test)]
async fn corrupted_session_file_reads_as_signed_out() {
    let portal = TestPortal::new().await;
    std::fs::write(
        portal.store_path(),
        r#"{"user": "{broken", "auth_token": "demo-token-1-0"}"#,
    )
    .expect("write session file");

    let (_, body) = portal.get("/api/app/whoami").await;
    assert_eq!(body["status"], "public");

    let text = std::fs::read_to_string(portal.store_path()).expect("session file");
    assert!(!text.contains("auth_token"));
}

#[test_log::test(tokio::test)]
async fn truncated_session_file_does_not_break_requests() {
    let portal = TestPortal::new().await;
    std::fs::write(portal.store_path(), r#"{"user": "{\"id\":"#).expect("write session file");

    let (status, body) = portal.get("/api/app/whoami").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "public");

    let (status, _) = portal.login("student@demo.com", "student").await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = portal.get("/api/app/whoami").await;
    assert_eq!(body["email"], "student@demo.com");
}

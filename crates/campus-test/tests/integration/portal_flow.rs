//! Sign in, browse, sign out.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn student_session_round_trip() {
    let portal = TestPortal::new().await;

    let (status, body) = portal.get("/api/app/whoami").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "public");

    let (status, body) = portal.login("student@demo.com", "student").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["firstName"], "John");
    tracing::info!(token = %body["token"], "Signed in");

    let (status, body) = portal.get("/api/app/navigation").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["label"], "Student Portal");

    let (status, body) = portal
        .get("/api/app/schedule?year=2025&month=9&selected=2025-09-03")
        .await;
    assert_eq!(status, StatusCode::OK);
    let agenda: Vec<&str> = body["agenda"]
        .as_array()
        .expect("agenda array")
        .iter()
        .filter_map(|event| event["title"].as_str())
        .collect();
    assert_eq!(
        agenda,
        ["Web Development", "Algorithms", "Web Development Lab"]
    );

    assert_eq!(portal.logout().await, StatusCode::NO_CONTENT);

    let (status, _) = portal.get("/api/app/navigation").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(!portal.auth.is_authenticated().expect("store readable"));
}

#[test_log::test(tokio::test)]
async fn failed_login_keeps_previous_state() {
    let portal = TestPortal::new().await;

    let (status, body) = portal.login("teacher@demo.com", "admin").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Please select teacher role");

    let (status, body) = portal.get("/api/app/whoami").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "public");
}

#[test_log::test(tokio::test)]
async fn switching_accounts_replaces_the_session() {
    let portal = TestPortal::new().await;

    portal.login("student@demo.com", "student").await;
    let (status, _) = portal.login("admin@demo.com", "admin").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = portal.get("/api/app/whoami").await;
    assert_eq!(body["role"], "admin");
}

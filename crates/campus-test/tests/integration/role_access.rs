//! Page guard decisions as seen through the API.

use salvo::http::StatusCode;

use super::helpers::*;

const GUARDED: [&str; 8] = [
    "/api/app/dashboard",
    "/api/app/schedule?year=2025&month=9",
    "/api/app/courses",
    "/api/app/assignments",
    "/api/app/exams",
    "/api/app/messages/conversations",
    "/api/app/attendance/summary",
    "/api/app/grades/gpa",
];

async fn statuses(portal: &TestPortal) -> Vec<StatusCode> {
    let mut statuses = Vec::new();
    for path in GUARDED {
        statuses.push(portal.get(path).await.0);
    }
    statuses
}

#[test_log::test(tokio::test)]
async fn public_requests_are_unauthorized() {
    let portal = TestPortal::new().await;
    assert!(
        statuses(&portal)
            .await
            .iter()
            .all(|status| *status == StatusCode::UNAUTHORIZED)
    );
}

#[test_log::test(tokio::test)]
async fn student_and_teacher_reach_every_page() {
    for (email, role) in [("student@demo.com", "student"), ("teacher@demo.com", "teacher")] {
        let portal = TestPortal::new().await;
        portal.login(email, role).await;
        assert!(
            statuses(&portal).await.iter().all(|status| *status == StatusCode::OK),
            "{role}"
        );
    }
}

#[test_log::test(tokio::test)]
async fn admin_is_limited_to_admin_pages() {
    let portal = TestPortal::new().await;
    portal.login("admin@demo.com", "admin").await;

    assert_eq!(
        statuses(&portal).await,
        [
            StatusCode::OK,
            StatusCode::OK,
            StatusCode::OK,
            StatusCode::FORBIDDEN,
            StatusCode::FORBIDDEN,
            StatusCode::FORBIDDEN,
            StatusCode::FORBIDDEN,
            StatusCode::FORBIDDEN,
        ]
    );
}

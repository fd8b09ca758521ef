use salvo::{Depot, Response, Router, handler, writing::Json};
use serde::Serialize;

use campus_service::portal::grades::{GpaSummary, gpa, weighted_score};

use super::signed_in_context;
use crate::middleware::page_access::PageAccess;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CourseGrade<'a> {
    code: &'a str,
    name: &'a str,
    credits: u32,
    letter_grade: &'a str,
    weighted_score: Option<f64>,
}

#[derive(Debug, Serialize)]
struct GpaResponse<'a> {
    summary: GpaSummary,
    courses: Vec<CourseGrade<'a>>,
}

/// ## Summary
/// GET /app/grades/gpa - Credit-weighted GPA over the transcript, with each
/// course's weighted score.
#[handler]
async fn transcript_gpa(depot: &mut Depot, res: &mut Response) {
    let Some((_user, catalog)) = signed_in_context(depot, res) else {
        return;
    };

    let courses = catalog
        .transcript
        .iter()
        .map(|entry| CourseGrade {
            code: &entry.code,
            name: &entry.name,
            credits: entry.credits,
            letter_grade: &entry.letter_grade,
            weighted_score: weighted_score(&entry.work),
        })
        .collect();

    res.render(Json(GpaResponse {
        summary: gpa(&catalog.transcript),
        courses,
    }));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("grades/gpa")
        .hoop(PageAccess::page("/grades"))
        .get(transcript_gpa)
}

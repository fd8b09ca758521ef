use salvo::{Depot, Response, Router, handler, writing::Json};

use campus_service::portal::exams::exam_board;

use super::signed_in_context;
use crate::middleware::page_access::PageAccess;

/// ## Summary
/// GET /app/exams - Exams with their countdown state, soonest first.
#[handler]
async fn exams(depot: &mut Depot, res: &mut Response) {
    let Some((user, catalog)) = signed_in_context(depot, res) else {
        return;
    };
    let now = chrono::Local::now().naive_local();
    res.render(Json(exam_board(&catalog, &user, now)));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("exams")
        .hoop(PageAccess::page("/exams"))
        .get(exams)
}

use campus_core::types::Role;
use salvo::{Depot, Response, Router, handler, writing::Json};

use campus_service::catalog::model::Attendance;
use campus_service::portal::attendance::summarize;

use super::signed_in_context;
use crate::middleware::page_access::PageAccess;

/// ## Summary
/// GET /app/attendance/summary - Attendance tallies. Students see their own
/// records, teachers see every record.
#[handler]
async fn summary(depot: &mut Depot, res: &mut Response) {
    let Some((user, catalog)) = signed_in_context(depot, res) else {
        return;
    };

    let records: Vec<Attendance> = catalog
        .attendance
        .iter()
        .filter(|record| user.role != Role::Student || record.student_id == user.id)
        .cloned()
        .collect();

    res.render(Json(summarize(&records)));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("attendance/summary")
        .hoop(PageAccess::page("/attendance"))
        .get(summary)
}

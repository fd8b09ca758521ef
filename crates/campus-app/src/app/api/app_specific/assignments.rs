use salvo::{Depot, Response, Router, handler, writing::Json};

use campus_service::portal::assignments::assignment_board;

use super::signed_in_context;
use crate::middleware::page_access::PageAccess;

/// ## Summary
/// GET /app/assignments - Assignments with their due state for the
/// signed-in user.
#[handler]
async fn assignments(depot: &mut Depot, res: &mut Response) {
    let Some((user, catalog)) = signed_in_context(depot, res) else {
        return;
    };
    let now = chrono::Local::now().naive_local();
    res.render(Json(assignment_board(&catalog, &user, now)));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("assignments")
        .hoop(PageAccess::page("/assignments"))
        .get(assignments)
}

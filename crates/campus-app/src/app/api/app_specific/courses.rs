use salvo::{Depot, Response, Router, handler, writing::Json};

use campus_service::portal::courses::course_cards;

use super::signed_in_context;
use crate::middleware::page_access::PageAccess;

/// ## Summary
/// GET /app/courses - Course list with instructors, open seats and materials.
#[handler]
async fn courses(depot: &mut Depot, res: &mut Response) {
    let Some((_user, catalog)) = signed_in_context(depot, res) else {
        return;
    };
    res.render(Json(course_cards(&catalog)));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("courses")
        .hoop(PageAccess::page("/courses"))
        .get(courses)
}

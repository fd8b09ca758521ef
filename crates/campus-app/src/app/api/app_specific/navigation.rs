use salvo::{Depot, Response, Router, handler, http::StatusCode, writing::Json};
use serde::Serialize;
use tracing::error;

use campus_service::catalog::User;
use campus_service::portal::RoleProfile;

use crate::error::render_error;
use crate::middleware::{auth::get_user_from_depot, page_access::PageAccess};
use crate::portal_handler::get_roles_from_depot;

#[derive(Debug, Serialize)]
struct NavigationResponse<'a> {
    user: &'a User,
    profile: &'a RoleProfile,
}

/// ## Summary
/// GET /app/navigation - The signed-in user's role profile: navigation, quick
/// actions, greeting and theme.
#[handler]
async fn navigation(depot: &mut Depot, res: &mut Response) {
    let roles = match get_roles_from_depot(depot) {
        Ok(roles) => roles,
        Err(e) => {
            error!(error = ?e, "Failed to get role table");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            return;
        }
    };
    let Some(user) = get_user_from_depot(depot) else {
        render_error(res, StatusCode::UNAUTHORIZED, "Not authenticated");
        return;
    };

    res.render(Json(NavigationResponse {
        user,
        profile: roles.profile(user.role),
    }));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("navigation")
        .hoop(PageAccess::signed_in())
        .get(navigation)
}

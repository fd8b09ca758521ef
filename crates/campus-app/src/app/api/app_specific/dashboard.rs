use salvo::{Depot, Response, Router, handler, writing::Json};
use serde::Serialize;

use campus_service::catalog::model::Announcement;
use campus_service::portal::{Dashboard, NavItem, StatCard};

use super::signed_in_context;
use crate::middleware::page_access::PageAccess;
use crate::portal_handler::get_roles_from_depot;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardResponse<'a> {
    greeting: &'static str,
    stats: Vec<StatCard>,
    quick_actions: &'a [NavItem],
    announcements: Vec<&'a Announcement>,
}

/// ## Summary
/// GET /app/dashboard - Stat cards, quick actions and visible announcements
/// for the signed-in role.
#[handler]
async fn dashboard(depot: &mut Depot, res: &mut Response) {
    let Some((user, catalog)) = signed_in_context(depot, res) else {
        return;
    };
    let roles = get_roles_from_depot(depot).unwrap_or_default();
    let profile = roles.profile(user.role);

    let now = chrono::Local::now().naive_local();
    let Dashboard {
        stats,
        announcements,
    } = Dashboard::build(&catalog, user.role, now);

    res.render(Json(DashboardResponse {
        greeting: profile.greeting,
        stats,
        quick_actions: &profile.quick_actions,
        announcements,
    }));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("dashboard")
        .hoop(PageAccess::page("/"))
        .get(dashboard)
}

// Portal API handlers.

use std::sync::Arc;

use salvo::{Depot, Response, Router, http::StatusCode};
use tracing::error;

use campus_service::catalog::{Catalog, User};

use crate::error::render_error;
use crate::middleware::auth::get_user_from_depot;
use crate::portal_handler::get_catalog_from_depot;

mod assignments;
mod attendance;
mod auth;
mod courses;
mod dashboard;
mod exams;
mod grades;
mod healthcheck;
mod messages;
mod navigation;
mod schedule;
mod whoami;

#[must_use]
pub fn routes() -> Router {
    Router::with_path("app")
        .push(healthcheck::routes())
        .push(auth::routes())
        .push(whoami::routes())
        .push(navigation::routes())
        .push(schedule::routes())
        .push(dashboard::routes())
        .push(courses::routes())
        .push(assignments::routes())
        .push(exams::routes())
        .push(messages::routes())
        .push(attendance::routes())
        .push(grades::routes())
}

/// Signed-in user and catalog for a guarded handler; renders the error response when either is missing.
fn signed_in_context(depot: &Depot, res: &mut Response) -> Option<(User, Arc<Catalog>)> {
    let Some(user) = get_user_from_depot(depot).cloned() else {
        render_error(res, StatusCode::UNAUTHORIZED, "Not authenticated");
        return None;
    };
    match get_catalog_from_depot(depot) {
        Ok(catalog) => Some((user, catalog)),
        Err(e) => {
            error!(error = ?e, "Failed to get catalog");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            None
        }
    }
}

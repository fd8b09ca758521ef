mod app_specific;

use std::sync::Arc;

use salvo::Router;

use campus_service::auth::{AuthService, PageGuard};
use campus_service::catalog::Catalog;
use campus_service::portal::RoleTable;

use crate::config::{ConfigHandler, Settings};
use crate::error::AppResult;
use crate::middleware::auth::AuthMiddleware;
use crate::portal_handler::PortalHandler;

// Re-export route constants from core
pub use campus_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, APP_ROUTE_COMPONENT, APP_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the API router with the portal handlers.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .hoop(AuthMiddleware)
        .push(app_specific::routes())
}

/// ## Summary
/// Builds the full router: settings and portal state injected into the
/// depot, then the API routes. The page guard is derived from the role table.
///
/// ## Errors
/// Returns an error if the page guard cannot be initialized.
pub async fn build_router(settings: &Settings, auth: Arc<AuthService>) -> AppResult<Router> {
    let roles = Arc::new(RoleTable::standard());
    let guard = Arc::new(PageGuard::from_role_table(&roles).await?);
    let catalog = Arc::new(Catalog::demo());

    Ok(Router::new()
        .hoop(ConfigHandler::new(settings))
        .hoop(PortalHandler {
            auth,
            guard,
            roles,
            catalog,
        })
        .push(routes()))
}

use std::sync::Arc;

use salvo::async_trait;

use campus_core::error::CoreError;
use campus_service::auth::{AuthService, PageGuard};
use campus_service::catalog::Catalog;
use campus_service::portal::RoleTable;

use crate::error::AppResult;

/// Shared portal services, injected into the depot for every request.
pub struct PortalHandler {
    pub auth: Arc<AuthService>,
    pub guard: Arc<PageGuard>,
    pub roles: Arc<RoleTable>,
    pub catalog: Arc<Catalog>,
}

#[async_trait]
impl salvo::Handler for PortalHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(self.auth.clone());
        depot.inject(self.guard.clone());
        depot.inject(self.roles.clone());
        depot.inject(self.catalog.clone());
    }
}

/// ## Summary
/// Retrieves the authentication service from the depot.
///
/// ## Errors
/// Returns an error if the service is not found in the depot.
pub fn get_auth_from_depot(depot: &salvo::Depot) -> AppResult<Arc<AuthService>> {
    depot
        .obtain::<Arc<AuthService>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Auth service not found in depot").into())
}

/// ## Summary
/// Retrieves the page guard from the depot.
///
/// ## Errors
/// Returns an error if the guard is not found in the depot.
pub fn get_guard_from_depot(depot: &salvo::Depot) -> AppResult<Arc<PageGuard>> {
    depot
        .obtain::<Arc<PageGuard>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Page guard not found in depot").into())
}

/// ## Summary
/// Retrieves the role table from the depot.
///
/// ## Errors
/// Returns an error if the table is not found in the depot.
pub fn get_roles_from_depot(depot: &salvo::Depot) -> AppResult<Arc<RoleTable>> {
    depot
        .obtain::<Arc<RoleTable>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Role table not found in depot").into())
}

/// ## Summary
/// Retrieves the catalog from the depot.
///
/// ## Errors
/// Returns an error if the catalog is not found in the depot.
pub fn get_catalog_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Catalog>> {
    depot
        .obtain::<Arc<Catalog>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Catalog not found in depot").into())
}

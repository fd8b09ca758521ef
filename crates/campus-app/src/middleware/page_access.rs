use salvo::Depot;
use salvo::http::StatusCode;
use tracing::error;

use crate::error::render_error;
use crate::middleware::auth::get_user_from_depot;
use crate::portal_handler::get_guard_from_depot;

/// ## Summary
/// Route guard: rejects requests without a signed-in user, and, when a page
/// is set, requests whose role may not view that page.
///
/// ## Errors
/// Responds 401 without a session, 403 when the page guard denies the role,
/// and 500 if the guard is unavailable or fails.
pub struct PageAccess {
    page: Option<&'static str>,
}

impl PageAccess {
    /// Requires a signed-in user whose role may view `page`.
    #[must_use]
    pub const fn page(page: &'static str) -> Self {
        Self { page: Some(page) }
    }

    /// Requires any signed-in user.
    #[must_use]
    pub const fn signed_in() -> Self {
        Self { page: None }
    }
}

#[salvo::async_trait]
impl salvo::Handler for PageAccess {
    #[tracing::instrument(skip(self, _req, depot, res, ctrl), fields(page = ?self.page))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        let Some(role) = get_user_from_depot(depot).map(|user| user.role) else {
            render_error(res, StatusCode::UNAUTHORIZED, "Not authenticated");
            ctrl.skip_rest();
            return;
        };

        let Some(page) = self.page else {
            return;
        };

        let guard = match get_guard_from_depot(depot) {
            Ok(guard) => guard,
            Err(e) => {
                error!(error = ?e, "Failed to get page guard from depot");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        match guard.can_view(role, page) {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(%role, page, "Page access denied");
                render_error(
                    res,
                    StatusCode::FORBIDDEN,
                    format!("The {role} portal has no {page} page"),
                );
                ctrl.skip_rest();
            }
            Err(e) => {
                error!(error = ?e, "Page guard evaluation failed");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
            }
        }
    }
}

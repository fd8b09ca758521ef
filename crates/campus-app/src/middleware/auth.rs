use salvo::Depot;
use salvo::http::header::AUTHORIZATION;
use tracing::error;

use campus_service::catalog::User;

use crate::portal_handler::get_auth_from_depot;

pub mod depot_keys {
    pub const AUTHENTICATED_USER: &str = "__authenticated_user";
}

/// Represents the signed-in user or public access in the depot.
#[derive(Debug, Clone)]
pub enum DepotUser {
    /// Signed-in user
    User(Box<User>),
    /// No session
    Public,
}

/// ## Summary
/// Returns the signed-in user stored by [`AuthMiddleware`], if any.
#[must_use]
pub fn get_user_from_depot(depot: &Depot) -> Option<&User> {
    match depot.get::<DepotUser>(depot_keys::AUTHENTICATED_USER) {
        Ok(DepotUser::User(user)) => Some(&**user),
        _ => None,
    }
}

fn bearer_token(req: &salvo::Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
}

/// ## Summary
/// Resolves the persisted portal session and stores the user in the depot.
/// A request carrying a bearer token that does not match the session token is
/// treated as public.
///
/// ## Side Effects
/// Inserts a [`DepotUser`] under `depot_keys::AUTHENTICATED_USER` for downstream handlers.
///
/// ## Errors
/// Returns an HTTP 500 response if the session store cannot be read.
#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Resolving session");

        if req.method() == salvo::http::Method::OPTIONS {
            depot.insert(depot_keys::AUTHENTICATED_USER, DepotUser::Public);
            return;
        }

        let auth = match get_auth_from_depot(depot) {
            Ok(auth) => auth,
            Err(e) => {
                error!(error = ?e, "Failed to get auth service from depot");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        match auth.session() {
            Ok(Some(session)) => {
                if bearer_token(req).is_some_and(|presented| presented != session.token) {
                    tracing::debug!("Bearer token does not match the session, treating as public");
                    depot.insert(depot_keys::AUTHENTICATED_USER, DepotUser::Public);
                    return;
                }
                tracing::debug!(user_id = %session.user.id, "Session resolved");
                depot.insert(
                    depot_keys::AUTHENTICATED_USER,
                    DepotUser::User(Box::new(session.user)),
                );
            }
            Ok(None) => {
                tracing::debug!("No session, treating as public");
                depot.insert(depot_keys::AUTHENTICATED_USER, DepotUser::Public);
            }
            Err(service_err) => {
                error!(error = ?service_err, "Session lookup failed");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                res.body("Internal Server Error");
                ctrl.skip_rest();
            }
        }
    }
}

/// ## Summary
/// Middleware handler for session resolution.
pub struct AuthMiddleware;

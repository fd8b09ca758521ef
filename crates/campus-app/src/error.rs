use salvo::http::StatusCode;
use salvo::writing::Json;
use serde::Serialize;
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] campus_service::error::ServiceError),

    #[error(transparent)]
    ScheduleError(#[from] campus_schedule::error::ScheduleError),

    #[error(transparent)]
    CoreError(#[from] campus_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Writes `{ "error": message }` with `status`.
pub fn render_error(res: &mut salvo::Response, status: StatusCode, message: impl Into<String>) {
    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: message.into(),
    }));
}

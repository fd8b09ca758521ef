use campus_core::types::Role;
use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Casbin error: {0}")]
    CasbinError(#[from] casbin::Error),

    #[error(transparent)]
    ScheduleError(#[from] campus_schedule::error::ScheduleError),

    #[error(transparent)]
    CoreError(#[from] campus_core::error::CoreError),

    #[error("User not found")]
    UserNotFound,

    #[error("Please select {expected} role")]
    RoleMismatch { expected: Role },

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ServiceError {
    /// `true` for failures caused by the submitted credentials rather than the system.
    #[must_use]
    pub const fn is_credential_error(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound | Self::RoleMismatch { .. } | Self::InvalidPassword
        )
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

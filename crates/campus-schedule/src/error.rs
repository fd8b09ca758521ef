use thiserror::Error;

/// Schedule and calendar errors
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Invalid weekday code: {0}")]
    InvalidWeekday(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error(transparent)]
    CoreError(#[from] campus_core::error::CoreError),
}

pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;

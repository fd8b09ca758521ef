//! Calendar month bounds and the Monday-first month grid.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::error::{ScheduleError, ScheduleResult};

/// A month being displayed in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// ## Summary
    /// Creates a month, rejecting months outside `1..=12` and years chrono cannot represent.
    ///
    /// ## Errors
    /// Returns `InvalidMonth` for out-of-range input.
    pub fn new(year: i32, month: u32) -> ScheduleResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ScheduleError::InvalidMonth { year, month });
        }
        // The last day must exist too, otherwise the grid cannot be closed.
        let candidate = Self { year, month };
        candidate.next_first_day()?;
        Ok(candidate)
    }

    /// Month containing the given date.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// ## Summary
    /// First day of the month.
    ///
    /// ## Errors
    /// Returns `InvalidMonth` if the month was not built through [`CalendarMonth::new`].
    pub fn first_day(self) -> ScheduleResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or(ScheduleError::InvalidMonth {
            year: self.year,
            month: self.month,
        })
    }

    /// ## Summary
    /// Last day of the month.
    ///
    /// ## Errors
    /// Returns `DateOutOfRange` at the end of chrono's supported range.
    pub fn last_day(self) -> ScheduleResult<NaiveDate> {
        self.next_first_day()?
            .pred_opt()
            .ok_or_else(|| ScheduleError::DateOutOfRange(format!("{}-{}", self.year, self.month)))
    }

    /// `true` if `date` falls on or between the first and last day.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// ## Summary
    /// The following month.
    ///
    /// ## Errors
    /// Returns `InvalidMonth` past the end of chrono's range.
    pub fn next(self) -> ScheduleResult<Self> {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// ## Summary
    /// The preceding month.
    ///
    /// ## Errors
    /// Returns `InvalidMonth` before the start of chrono's range.
    pub fn previous(self) -> ScheduleResult<Self> {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    fn next_first_day(self) -> ScheduleResult<NaiveDate> {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ScheduleError::DateOutOfRange(format!("{}-{}", self.year, self.month)))
    }
}

impl std::fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// ## Summary
/// Builds the Monday-first grid for a month: every day from the Monday on or
/// before the 1st through the Sunday on or after the last day, inclusive.
///
/// The result length is always a multiple of 7.
///
/// ## Errors
/// Returns `DateOutOfRange` when the padded weeks leave chrono's range.
#[tracing::instrument(level = "trace")]
pub fn month_grid(month: CalendarMonth) -> ScheduleResult<Vec<NaiveDate>> {
    let first = month.first_day()?;
    let last = month.last_day()?;

    let lead = u64::from(first.weekday().num_days_from_monday());
    let trail = u64::from(6 - last.weekday().num_days_from_monday());

    let out_of_range = || ScheduleError::DateOutOfRange(month.to_string());
    let start = first.checked_sub_days(Days::new(lead)).ok_or_else(out_of_range)?;
    let end = last.checked_add_days(Days::new(trail)).ok_or_else(out_of_range)?;

    let days: Vec<NaiveDate> = start.iter_days().take_while(|day| *day <= end).collect();

    tracing::trace!(%month, %start, %end, cells = days.len(), "Built month grid");
    Ok(days)
}

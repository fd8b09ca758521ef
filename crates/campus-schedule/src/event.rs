use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::weekday::Weekday;

/// Kind of schedule entry; drives the cell colour in the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Lecture,
    Lab,
    Study,
}

impl EventCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lecture => "lecture",
            Self::Lab => "lab",
            Self::Study => "study",
        }
    }
}

/// A statically defined class, lab or study session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: u32,
    pub title: String,
    pub instructor: String,
    pub location: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub category: EventCategory,
    /// Weekdays on which the event repeats; empty for one-off events.
    #[serde(default)]
    pub recurrence: BTreeSet<Weekday>,
}

impl ScheduleEvent {
    /// Calendar date of the event's literal occurrence.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    #[must_use]
    pub fn is_recurring(&self) -> bool {
        !self.recurrence.is_empty()
    }

    #[must_use]
    pub fn recurs_on(&self, weekday: Weekday) -> bool {
        self.recurrence.contains(&weekday)
    }

    #[must_use]
    pub fn duration(&self) -> chrono::TimeDelta {
        self.end.signed_duration_since(self.start)
    }
}

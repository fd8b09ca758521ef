//! The compiled-in term schedule shown on the schedule page.

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::{EventCategory, ScheduleEvent};
use crate::weekday::Weekday;

fn at(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn entry(
    id: u32,
    title: &str,
    instructor: &str,
    location: &str,
    (start, end): (NaiveDateTime, NaiveDateTime),
    category: EventCategory,
    recurrence: &[Weekday],
) -> ScheduleEvent {
    ScheduleEvent {
        id,
        title: title.to_string(),
        instructor: instructor.to_string(),
        location: location.to_string(),
        start,
        end,
        category,
        recurrence: recurrence.iter().copied().collect(),
    }
}

/// Fall 2025 classes, labs and study sessions.
#[must_use]
pub fn term_schedule() -> Vec<ScheduleEvent> {
    use Weekday::{Friday, Monday, Thursday, Tuesday, Wednesday};

    vec![
        entry(
            1,
            "Web Development",
            "Dr. Smith",
            "Building A, Room 302",
            (at(9, 2, 9, 0), at(9, 2, 10, 30)),
            EventCategory::Lecture,
            &[Monday, Wednesday],
        ),
        entry(
            2,
            "Database Systems",
            "Prof. Johnson",
            "Building B, Room 205",
            (at(9, 2, 11, 0), at(9, 2, 12, 30)),
            EventCategory::Lecture,
            &[Tuesday, Thursday],
        ),
        entry(
            3,
            "Algorithms",
            "Dr. Williams",
            "Building C, Room 101",
            (at(9, 2, 13, 0), at(9, 2, 14, 0)),
            EventCategory::Lecture,
            &[Monday, Wednesday, Friday],
        ),
        entry(
            4,
            "Web Development Lab",
            "Dr. Smith",
            "Computer Lab 3",
            (at(9, 3, 14, 0), at(9, 3, 16, 0)),
            EventCategory::Lab,
            &[Thursday],
        ),
        entry(
            5,
            "Study Group",
            "Self",
            "Library Study Room 5",
            (at(9, 4, 15, 0), at(9, 4, 17, 0)),
            EventCategory::Study,
            &[],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_is_well_formed() {
        let events = term_schedule();
        assert_eq!(events.len(), 5);
        for event in &events {
            assert!(event.end > event.start, "{} ends before it starts", event.title);
        }
        let ids: Vec<_> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(!events[4].is_recurring());
    }
}

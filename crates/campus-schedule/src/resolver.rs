//! Resolves which schedule events land on a calendar day.
//!
//! An event lands on a day when its literal start date is that day, or when
//! the day's weekday is in its recurrence set and the day is inside the
//! recurrence window. The window depends on [`RecurrenceScope`]:
//!
//! - `DisplayedMonth`: the first through last day of the month on screen.
//!   Padding days from neighbouring months never receive recurring events.
//! - `FromStart`: every day on or after the event's own start date.

use chrono::{Datelike, NaiveDate};

pub use campus_core::config::RecurrenceScope;

use crate::event::ScheduleEvent;
use crate::month::CalendarMonth;
use crate::weekday::Weekday;

/// `true` if `event` should be listed on `day` while `displayed` is on screen.
#[must_use]
pub fn occurs_on(
    event: &ScheduleEvent,
    day: NaiveDate,
    displayed: CalendarMonth,
    scope: RecurrenceScope,
) -> bool {
    if event.start_date() == day {
        return true;
    }
    if !event.recurs_on(Weekday::from(day.weekday())) {
        return false;
    }
    match scope {
        RecurrenceScope::DisplayedMonth => displayed.contains(day),
        RecurrenceScope::FromStart => day >= event.start_date(),
    }
}

/// ## Summary
/// Returns the events that land on `day`, in the order of `events`.
///
/// Each event is tested once, so an event matching both its literal date and
/// its recurrence appears a single time.
#[must_use]
pub fn events_for_day<'a>(
    day: NaiveDate,
    events: &'a [ScheduleEvent],
    displayed: CalendarMonth,
    scope: RecurrenceScope,
) -> Vec<&'a ScheduleEvent> {
    events
        .iter()
        .filter(|event| occurs_on(event, day, displayed, scope))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::event::EventCategory;
    use crate::month::month_grid;

    fn at(y: i32, m: u32, d: u32, h: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn event(id: u32, start: chrono::NaiveDateTime, days: &[Weekday]) -> ScheduleEvent {
        ScheduleEvent {
            id,
            title: format!("Event {id}"),
            instructor: "Staff".to_string(),
            location: "Hall".to_string(),
            start,
            end: start + chrono::TimeDelta::hours(1),
            category: EventCategory::Lecture,
            recurrence: days.iter().copied().collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn recurring_event_hits_every_matching_weekday_in_month_only() {
        // Anchored in August, displayed month is October 2025.
        let events = vec![event(1, at(2025, 8, 5, 9), &[Weekday::Monday, Weekday::Wednesday])];
        let october = CalendarMonth::new(2025, 10).unwrap();

        for day in month_grid(october).unwrap() {
            let hits = events_for_day(day, &events, october, RecurrenceScope::DisplayedMonth);
            let weekday = Weekday::from(day.weekday());
            let expected = october.contains(day)
                && matches!(weekday, Weekday::Monday | Weekday::Wednesday);
            assert_eq!(!hits.is_empty(), expected, "unexpected result on {day}");
        }
    }

    #[test]
    fn padding_days_do_not_receive_recurrences() {
        let events = vec![event(1, at(2025, 8, 5, 9), &[Weekday::Monday])];
        let october = CalendarMonth::new(2025, 10).unwrap();
        // 29 Sep 2025 is a Monday shown as padding in the October grid.
        let padding = NaiveDate::from_ymd_opt(2025, 9, 29).unwrap();
        assert!(
            events_for_day(padding, &events, october, RecurrenceScope::DisplayedMonth).is_empty()
        );
    }

    #[test]
    fn one_off_event_only_on_its_date() {
        let events = vec![event(5, at(2025, 9, 4, 15), &[])];
        let september = CalendarMonth::new(2025, 9).unwrap();

        let hits: Vec<_> = month_grid(september)
            .unwrap()
            .into_iter()
            .filter(|day| {
                !events_for_day(*day, &events, september, RecurrenceScope::DisplayedMonth)
                    .is_empty()
            })
            .collect();
        assert_eq!(hits, vec![NaiveDate::from_ymd_opt(2025, 9, 4).unwrap()]);
    }

    #[test]
    fn literal_date_matches_outside_displayed_month() {
        let events = vec![event(5, at(2025, 10, 2, 15), &[])];
        let september = CalendarMonth::new(2025, 9).unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();
        assert_eq!(
            events_for_day(day, &events, september, RecurrenceScope::DisplayedMonth).len(),
            1
        );
    }

    #[test]
    fn literal_and_recurring_match_counts_once() {
        // 2 Sep 2025 is a Tuesday.
        let events = vec![event(2, at(2025, 9, 2, 11), &[Weekday::Tuesday])];
        let september = CalendarMonth::new(2025, 9).unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
        assert_eq!(
            events_for_day(day, &events, september, RecurrenceScope::DisplayedMonth).len(),
            1
        );
    }

    #[test]
    fn results_keep_source_order() {
        let events = vec![
            event(3, at(2025, 9, 2, 13), &[Weekday::Monday]),
            event(1, at(2025, 9, 2, 9), &[Weekday::Monday]),
            event(2, at(2025, 9, 2, 11), &[Weekday::Tuesday]),
        ];
        let september = CalendarMonth::new(2025, 9).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();
        let ids: Vec<_> =
            events_for_day(monday, &events, september, RecurrenceScope::DisplayedMonth)
                .iter()
                .map(|e| e.id)
                .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn from_start_scope_ignores_displayed_month() {
        let events = vec![event(1, at(2025, 9, 2, 9), &[Weekday::Monday])];
        let september = CalendarMonth::new(2025, 9).unwrap();

        // Monday 29 Sep is in the grid, Monday 6 Oct would be outside it.
        let later = NaiveDate::from_ymd_opt(2025, 10, 6).unwrap();
        assert_eq!(
            events_for_day(later, &events, september, RecurrenceScope::FromStart).len(),
            1
        );
        assert!(
            events_for_day(later, &events, september, RecurrenceScope::DisplayedMonth).is_empty()
        );

        // Monday 1 Sep precedes the start date.
        let before = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert!(events_for_day(before, &events, september, RecurrenceScope::FromStart).is_empty());
        assert_eq!(
            events_for_day(before, &events, september, RecurrenceScope::DisplayedMonth).len(),
            1
        );
    }
}

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ScheduleResult;
use crate::event::ScheduleEvent;
use crate::month::{CalendarMonth, month_grid};
use crate::resolver::{RecurrenceScope, events_for_day};
use crate::weekday::Weekday;

/// One cell of the month grid, annotated for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub events: Vec<&'a ScheduleEvent>,
}

impl<'a> CalendarDay<'a> {
    /// Splits the cell's events into the first `limit` shown and the count left over.
    #[must_use]
    pub fn preview(&self, limit: usize) -> (&[&'a ScheduleEvent], usize) {
        let shown = limit.min(self.events.len());
        (&self.events[..shown], self.events.len() - shown)
    }
}

/// A rendered month: the grid cells plus the agenda of the selected day.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView<'a> {
    pub month: CalendarMonth,
    pub weekday_labels: [&'static str; 7],
    pub days: Vec<CalendarDay<'a>>,
    pub selected: NaiveDate,
    pub agenda: Vec<&'a ScheduleEvent>,
}

impl<'a> MonthView<'a> {
    /// ## Summary
    /// Builds the month view for `month`, flagging `today` and `selected`, and
    /// resolving every cell against `events`.
    ///
    /// ## Errors
    /// Returns an error if the month grid cannot be built.
    #[tracing::instrument(skip(events), fields(event_count = events.len()))]
    pub fn build(
        month: CalendarMonth,
        today: NaiveDate,
        selected: NaiveDate,
        events: &'a [ScheduleEvent],
        scope: RecurrenceScope,
    ) -> ScheduleResult<Self> {
        let days = month_grid(month)?
            .into_iter()
            .map(|date| CalendarDay {
                date,
                is_current_month: month.contains(date),
                is_today: date == today,
                is_selected: date == selected,
                events: events_for_day(date, events, month, scope),
            })
            .collect::<Vec<_>>();

        let agenda = events_for_day(selected, events, month, scope);

        tracing::debug!(
            %month,
            cells = days.len(),
            agenda = agenda.len(),
            "Month view built"
        );

        Ok(Self {
            month,
            weekday_labels: Weekday::all().map(Weekday::label),
            days,
            selected,
            agenda,
        })
    }

    /// The cell for `date`, if it is part of the grid.
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay<'a>> {
        self.days.iter().find(|day| day.date == date)
    }

    /// Grid rows of seven days each.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay<'a>]> {
        self.days.chunks(7)
    }
}

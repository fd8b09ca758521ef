//! Class schedule: events, weekday recurrence and the month calendar view.
//!
//! ## Module Organization
//!
//! - `weekday`: two-letter weekday codes used by recurrence sets
//! - `event`: schedule events and their categories
//! - `month`: calendar month bounds and the Monday-first month grid
//! - `resolver`: which events land on a given calendar day
//! - `view`: month cells annotated for rendering, plus the selected-day agenda
//! - `fixtures`: the compiled-in term schedule

pub mod error;
pub mod event;
pub mod fixtures;
pub mod month;
pub mod resolver;
pub mod view;
pub mod weekday;

pub use event::{EventCategory, ScheduleEvent};
pub use month::{CalendarMonth, month_grid};
pub use resolver::events_for_day;
pub use view::{CalendarDay, MonthView};
pub use weekday::Weekday;

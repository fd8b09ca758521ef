use chrono::NaiveDate;
use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::Serialize;
use tracing::error;

use campus_schedule::{CalendarMonth, MonthView, ScheduleEvent, month_grid};

use crate::config::get_schedule_config_from_depot;
use crate::error::{AppResult, render_error};
use crate::middleware::page_access::PageAccess;
use crate::portal_handler::get_catalog_from_depot;

/// One grid cell with its event preview truncated to the configured limit.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DayCell<'a> {
    date: NaiveDate,
    is_current_month: bool,
    is_today: bool,
    is_selected: bool,
    preview: &'a [&'a ScheduleEvent],
    more: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleResponse<'a> {
    month: String,
    previous: Option<String>,
    next: Option<String>,
    weekday_labels: [&'static str; 7],
    days: Vec<DayCell<'a>>,
    selected: NaiveDate,
    agenda: &'a [&'a ScheduleEvent],
}

/// Resolves the displayed month and selected day from the query string.
///
/// Without `year`/`month` the month of `selected` (or today) is shown. Without
/// `selected`, today is selected when it falls in the month, else the first day.
/// A `selected` day outside the displayed month's grid is rejected.
fn resolve_query(req: &Request, today: NaiveDate) -> AppResult<(CalendarMonth, NaiveDate)> {
    let selected = match req.query::<String>("selected") {
        Some(raw) => Some(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|e| {
            campus_core::error::CoreError::InvalidInput(format!("selected must be YYYY-MM-DD: {e}"))
        })?),
        None => None,
    };

    let month = match (req.query::<i32>("year"), req.query::<u32>("month")) {
        (Some(year), Some(month)) => CalendarMonth::new(year, month)?,
        (None, None) => CalendarMonth::containing(selected.unwrap_or(today)),
        _ => {
            return Err(campus_core::error::CoreError::InvalidInput(
                "year and month must be given together".to_string(),
            )
            .into());
        }
    };

    let selected = match selected {
        Some(day) if month_grid(month)?.contains(&day) => day,
        Some(day) => {
            return Err(campus_core::error::CoreError::InvalidInput(format!(
                "selected day {day} is not shown in {month}"
            ))
            .into());
        }
        None if month.contains(today) => today,
        None => month.first_day()?,
    };
    Ok((month, selected))
}

/// ## Summary
/// GET /app/schedule?year=&month=&selected= - The month calendar with each
/// cell's events and the selected day's agenda.
///
/// ## Errors
/// Returns HTTP 400 for an invalid month or date, HTTP 500 if state is missing.
#[handler]
async fn schedule(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let today = chrono::Local::now().date_naive();
    let (month, selected) = match resolve_query(req, today) {
        Ok(resolved) => resolved,
        Err(e) => {
            render_error(res, StatusCode::BAD_REQUEST, e.to_string());
            return;
        }
    };

    let (options, catalog) = match (
        get_schedule_config_from_depot(depot),
        get_catalog_from_depot(depot),
    ) {
        (Ok(options), Ok(catalog)) => (options, catalog),
        (Err(e), _) | (_, Err(e)) => {
            error!(error = ?e, "Failed to get schedule state");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            return;
        }
    };

    let view = match MonthView::build(
        month,
        today,
        selected,
        &catalog.schedule,
        options.recurrence_scope,
    ) {
        Ok(view) => view,
        Err(e) => {
            render_error(res, StatusCode::BAD_REQUEST, e.to_string());
            return;
        }
    };

    let limit = options.preview_limit;
    let days = view
        .days
        .iter()
        .map(|day| {
            let (preview, more) = day.preview(limit);
            DayCell {
                date: day.date,
                is_current_month: day.is_current_month,
                is_today: day.is_today,
                is_selected: day.is_selected,
                preview,
                more,
            }
        })
        .collect();

    res.render(Json(ScheduleResponse {
        month: month.to_string(),
        previous: month.previous().ok().map(|m| m.to_string()),
        next: month.next().ok().map(|m| m.to_string()),
        weekday_labels: view.weekday_labels,
        days,
        selected: view.selected,
        agenda: &view.agenda,
    }));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("schedule")
        .hoop(PageAccess::page("/schedule"))
        .get(schedule)
}

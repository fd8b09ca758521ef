//! Headline figures shown on each role's dashboard.

use campus_core::types::Role;
use chrono::NaiveDateTime;
use serde::Serialize;

use super::announcements::visible_to;
use super::attendance::summarize;
use crate::catalog::{Catalog, model::Announcement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub name: &'static str,
    pub value: String,
    pub change: &'static str,
    pub change_kind: ChangeKind,
    pub trend: Vec<f64>,
}

fn card(
    name: &'static str,
    value: String,
    change: &'static str,
    change_kind: ChangeKind,
    trend: &[f64],
) -> StatCard {
    StatCard {
        name,
        value,
        change,
        change_kind,
        trend: trend.to_vec(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard<'a> {
    pub stats: Vec<StatCard>,
    pub announcements: Vec<&'a Announcement>,
}

impl<'a> Dashboard<'a> {
    /// Stat cards and announcements for `role` as of `now`.
    #[must_use]
    pub fn build(catalog: &'a Catalog, role: Role, now: NaiveDateTime) -> Self {
        let stats = match role {
            Role::Student => student_stats(catalog, now),
            Role::Teacher => teacher_stats(catalog),
            Role::Admin => admin_stats(),
        };
        Self {
            stats,
            announcements: visible_to(&catalog.announcements, role),
        }
    }
}

/// ## Summary
/// Student figures: GPA estimated from the mean grade percentage, course
/// count, attendance rate, and assignments still due after `now`.
#[must_use]
#[tracing::instrument(level = "trace", skip(catalog))]
pub fn student_stats(catalog: &Catalog, now: NaiveDateTime) -> Vec<StatCard> {
    let (total, count) = catalog
        .grades
        .iter()
        .fold((0.0, 0.0), |(total, count), grade| (total + grade.percentage, count + 1.0));
    let gpa = if count > 0.0 { total / count / 25.0 } else { 0.0 };
    let attendance = summarize(&catalog.attendance);
    let pending = catalog
        .assignments
        .iter()
        .filter(|assignment| assignment.due_date > now)
        .count();

    vec![
        card(
            "Current GPA",
            format!("{gpa:.1}"),
            "+0.2",
            ChangeKind::Positive,
            &[3.2, 3.4, 3.3, 3.6, 3.8],
        ),
        card(
            "Enrolled Courses",
            catalog.courses.len().to_string(),
            "0",
            ChangeKind::Neutral,
            &[5.0, 5.0, 6.0, 6.0, 6.0],
        ),
        card(
            "Attendance",
            format!("{}%", attendance.percentage),
            "+5%",
            ChangeKind::Positive,
            &[85.0, 88.0, 90.0, 92.0, 95.0],
        ),
        card(
            "Pending Tasks",
            pending.to_string(),
            "-1",
            ChangeKind::Negative,
            &[8.0, 6.0, 4.0, 3.0, 2.0],
        ),
    ]
}

/// Class attendance shown to teachers; the catalog holds no per-class history.
const CLASS_ATTENDANCE_PERCENT: u32 = 87;

/// Each assignment is assumed to have this many submissions awaiting grading.
const SUBMISSIONS_PER_ASSIGNMENT: usize = 3;

#[must_use]
pub fn teacher_stats(catalog: &Catalog) -> Vec<StatCard> {
    let students: u32 = catalog.courses.iter().map(|c| c.enrolled_students).sum();
    let pending_grading = catalog.assignments.len() * SUBMISSIONS_PER_ASSIGNMENT;

    vec![
        card(
            "Active Courses",
            catalog.courses.len().to_string(),
            "0",
            ChangeKind::Neutral,
            &[4.0, 5.0, 5.0, 6.0, 6.0],
        ),
        card(
            "Total Students",
            students.to_string(),
            "+5",
            ChangeKind::Positive,
            &[120.0, 125.0, 130.0, 135.0, 142.0],
        ),
        card(
            "Pending Grading",
            pending_grading.to_string(),
            "-3",
            ChangeKind::Negative,
            &[25.0, 20.0, 18.0, 15.0, 12.0],
        ),
        card(
            "Class Attendance",
            format!("{CLASS_ATTENDANCE_PERCENT}%"),
            "+2%",
            ChangeKind::Positive,
            &[82.0, 84.0, 85.0, 86.0, 87.0],
        ),
    ]
}

#[must_use]
pub fn admin_stats() -> Vec<StatCard> {
    vec![
        card(
            "Total Users",
            "1,247".to_string(),
            "+23",
            ChangeKind::Positive,
            &[1200.0, 1210.0, 1225.0, 1235.0, 1247.0],
        ),
        card(
            "Active Sessions",
            "89".to_string(),
            "+12",
            ChangeKind::Positive,
            &[65.0, 70.0, 75.0, 82.0, 89.0],
        ),
        card(
            "System Health",
            "98%".to_string(),
            "+1%",
            ChangeKind::Positive,
            &[95.0, 96.0, 97.0, 97.0, 98.0],
        ),
        card(
            "Support Tickets",
            "3".to_string(),
            "-5",
            ChangeKind::Negative,
            &[12.0, 8.0, 6.0, 5.0, 3.0],
        ),
    ]
}

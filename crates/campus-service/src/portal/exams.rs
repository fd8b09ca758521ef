//! Exam countdown labels. Question content stays server side; cards carry
//! only counts and points.

use campus_core::types::Role;
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::catalog::model::{Exam, ExamKind};
use crate::catalog::{Catalog, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamStatus {
    Completed,
    Tomorrow,
    ThisWeek,
    Upcoming,
}

impl ExamStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Tomorrow => "Tomorrow",
            Self::ThisWeek => "This Week",
            Self::Upcoming => "Upcoming",
        }
    }
}

/// ## Summary
/// Countdown state of an exam starting at `starts`: `Completed` once it has
/// started, `Tomorrow` under 24 hours away, `ThisWeek` under 72 hours away.
#[must_use]
pub fn exam_status(starts: NaiveDateTime, now: NaiveDateTime) -> ExamStatus {
    let remaining = starts - now;
    if remaining < TimeDelta::zero() {
        ExamStatus::Completed
    } else if remaining < TimeDelta::hours(24) {
        ExamStatus::Tomorrow
    } else if remaining < TimeDelta::hours(72) {
        ExamStatus::ThisWeek
    } else {
        ExamStatus::Upcoming
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamCard<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub course_id: &'a str,
    pub course_name: Option<&'a str>,
    pub date: NaiveDateTime,
    pub duration_minutes: u32,
    pub kind: ExamKind,
    pub total_marks: u32,
    pub instructions: &'a str,
    pub question_count: usize,
    pub question_points: u32,
    pub status: ExamStatus,
    pub status_label: &'static str,
}

impl<'a> ExamCard<'a> {
    fn new(exam: &'a Exam, catalog: &'a Catalog, now: NaiveDateTime) -> Self {
        let status = exam_status(exam.date, now);
        Self {
            id: &exam.id,
            title: &exam.title,
            course_id: &exam.course_id,
            course_name: catalog.course(&exam.course_id).map(|c| c.name.as_str()),
            date: exam.date,
            duration_minutes: exam.duration_minutes,
            kind: exam.kind,
            total_marks: exam.total_marks,
            instructions: &exam.instructions,
            question_count: exam.questions.len(),
            question_points: exam.question_points(),
            status,
            status_label: status.label(),
        }
    }
}

/// Exams shown to `viewer`, soonest first. Teachers only see exams for the
/// courses they teach.
#[must_use]
pub fn exam_board<'a>(catalog: &'a Catalog, viewer: &User, now: NaiveDateTime) -> Vec<ExamCard<'a>> {
    let mut cards: Vec<ExamCard<'a>> = catalog
        .exams
        .iter()
        .filter(|exam| {
            viewer.role != Role::Teacher
                || catalog
                    .course(&exam.course_id)
                    .is_some_and(|course| course.instructor_id == viewer.id)
        })
        .map(|exam| ExamCard::new(exam, catalog, now))
        .collect();
    cards.sort_by_key(|card| card.date);
    cards
}

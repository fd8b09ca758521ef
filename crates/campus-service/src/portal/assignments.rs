//! Assignment due-state labels, relative to the viewer and the current time.

use campus_core::types::Role;
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::catalog::model::{Assignment, Grade};
use crate::catalog::{Catalog, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    Submitted,
    Overdue,
    DueSoon,
    Pending,
}

impl DueStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Overdue => "Overdue",
            Self::DueSoon => "Due Soon",
            Self::Pending => "Pending",
        }
    }
}

/// ## Summary
/// Due state of work due at `due`. Submitted work is always `Submitted`;
/// otherwise past due is `Overdue`, less than 24 hours left is `DueSoon`.
#[must_use]
pub fn due_status(due: NaiveDateTime, submitted: bool, now: NaiveDateTime) -> DueStatus {
    let remaining = due - now;
    if submitted {
        DueStatus::Submitted
    } else if remaining < TimeDelta::zero() {
        DueStatus::Overdue
    } else if remaining < TimeDelta::hours(24) {
        DueStatus::DueSoon
    } else {
        DueStatus::Pending
    }
}

/// A student has submitted an assignment once a grade for it exists.
#[must_use]
pub fn is_submitted(grades: &[Grade], student_id: &str, assignment_id: &str) -> bool {
    grades
        .iter()
        .any(|grade| grade.student_id == student_id && grade.assignment_id == assignment_id)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentCard<'a> {
    #[serde(flatten)]
    pub assignment: &'a Assignment,
    pub course_code: Option<&'a str>,
    pub submitted: bool,
    pub due_status: DueStatus,
    pub due_label: &'static str,
}

/// ## Summary
/// Assignments shown to `viewer`: every assignment for a student, with
/// submission taken from the grade book; the assignments of their own
/// courses for a teacher, who never submits. Catalog order is kept.
#[must_use]
pub fn assignment_board<'a>(
    catalog: &'a Catalog,
    viewer: &User,
    now: NaiveDateTime,
) -> Vec<AssignmentCard<'a>> {
    catalog
        .assignments
        .iter()
        .filter(|assignment| {
            viewer.role != Role::Teacher
                || catalog
                    .course(&assignment.course_id)
                    .is_some_and(|course| course.instructor_id == viewer.id)
        })
        .map(|assignment| {
            let submitted = viewer.role == Role::Student
                && is_submitted(&catalog.grades, &viewer.id, &assignment.id);
            let status = due_status(assignment.due_date, submitted, now);
            AssignmentCard {
                assignment,
                course_code: catalog
                    .course(&assignment.course_id)
                    .map(|course| course.code.as_str()),
                submitted,
                due_status: status,
                due_label: status.label(),
            }
        })
        .collect()
}

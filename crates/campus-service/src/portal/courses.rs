use serde::Serialize;

use crate::catalog::{Catalog, User};
use crate::catalog::model::Course;

/// A course with its instructor resolved and remaining capacity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCard<'a> {
    #[serde(flatten)]
    pub course: &'a Course,
    pub instructor_name: Option<String>,
    pub open_seats: u32,
}

/// Every course in catalog order, materials included.
#[must_use]
pub fn course_cards(catalog: &Catalog) -> Vec<CourseCard<'_>> {
    catalog
        .courses
        .iter()
        .map(|course| CourseCard {
            course,
            instructor_name: catalog.user(&course.instructor_id).map(User::full_name),
            open_seats: course.open_seats(),
        })
        .collect()
}

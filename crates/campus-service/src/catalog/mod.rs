//! The compiled-in portal data set.

pub mod fixtures;
pub mod model;

pub use model::User;

use model::{
    Announcement, Assignment, Attendance, Course, Exam, Grade, Message, TranscriptEntry,
};

/// Every record the portal pages read from, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub users: Vec<User>,
    pub courses: Vec<Course>,
    pub assignments: Vec<Assignment>,
    pub attendance: Vec<Attendance>,
    pub messages: Vec<Message>,
    pub grades: Vec<Grade>,
    pub announcements: Vec<Announcement>,
    pub exams: Vec<Exam>,
    pub transcript: Vec<TranscriptEntry>,
    pub schedule: Vec<campus_schedule::ScheduleEvent>,
}

impl Catalog {
    /// The demo data set.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            users: fixtures::users(),
            courses: fixtures::courses(),
            assignments: fixtures::assignments(),
            attendance: fixtures::attendance(),
            messages: fixtures::messages(),
            grades: fixtures::grades(),
            announcements: fixtures::announcements(),
            exams: fixtures::exams(),
            transcript: fixtures::transcript(),
            schedule: campus_schedule::fixtures::term_schedule(),
        }
    }

    #[must_use]
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    #[must_use]
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }
}

use campus_core::types::Role;

use crate::catalog::model::{Announcement, Audience};

/// Whether `role` is in the audience of `announcement`. Admins see everything.
#[must_use]
pub const fn is_visible_to(announcement: &Announcement, role: Role) -> bool {
    matches!(
        (role, announcement.target_audience),
        (Role::Admin, _)
            | (_, Audience::All)
            | (Role::Student, Audience::Students)
            | (Role::Teacher, Audience::Teachers)
    )
}

/// Announcements `role` can see, highest priority first, newest first within a priority.
#[must_use]
pub fn visible_to(announcements: &[Announcement], role: Role) -> Vec<&Announcement> {
    let mut visible: Vec<&Announcement> = announcements
        .iter()
        .filter(|announcement| is_visible_to(announcement, role))
        .collect();
    visible.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.publish_date.cmp(&a.publish_date))
    });
    visible
}

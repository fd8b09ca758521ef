//! Role-driven views derived from the catalog.

pub mod announcements;
pub mod assignments;
pub mod attendance;
pub mod courses;
pub mod dashboard;
pub mod exams;
pub mod grades;
pub mod messages;
pub mod roles;

pub use dashboard::{Dashboard, StatCard};
pub use roles::{NavItem, RoleProfile, RoleTable};

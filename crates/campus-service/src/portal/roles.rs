//! Per-role presentation data: navigation, quick actions, greeting and theme.
//!
//! Every role-dependent choice the portal makes is read from one
//! [`RoleTable`], built once at startup.

use std::collections::BTreeMap;

use campus_core::types::Role;
use serde::Serialize;

/// A sidebar or quick-action link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

const fn nav(name: &'static str, href: &'static str) -> NavItem {
    NavItem { name, href }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Sidebar background gradient.
    pub background: &'static str,
    /// Welcome banner gradient.
    pub gradient: &'static str,
    /// Glow around the active navigation entry.
    pub accent: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleProfile {
    pub role: Role,
    pub label: &'static str,
    pub emoji: &'static str,
    pub greeting: &'static str,
    pub theme: Theme,
    pub navigation: Vec<NavItem>,
    pub quick_actions: Vec<NavItem>,
}

impl RoleProfile {
    /// `true` if `href` appears in this role's navigation.
    #[must_use]
    pub fn has_page(&self, href: &str) -> bool {
        self.navigation.iter().any(|item| item.href == href)
    }
}

const BASE_NAVIGATION: [NavItem; 3] = [
    nav("Dashboard", "/"),
    nav("Courses", "/courses"),
    nav("Schedule", "/schedule"),
];

const LEARNING_NAVIGATION: [NavItem; 6] = [
    nav("Assignments", "/assignments"),
    nav("Exams", "/exams"),
    nav("Grades", "/grades"),
    nav("Attendance", "/attendance"),
    nav("Resources", "/resources"),
    nav("Messages", "/messages"),
];

fn navigation(extra: &[NavItem]) -> Vec<NavItem> {
    BASE_NAVIGATION.iter().chain(extra).cloned().collect()
}

fn student() -> RoleProfile {
    RoleProfile {
        role: Role::Student,
        label: "Student Portal",
        emoji: "🎓",
        greeting: "Ready to learn something new today?",
        theme: Theme {
            background: "from-blue-500/20 via-cyan-500/20 to-teal-500/20",
            gradient: "from-student-500 to-blue-500",
            accent: "rgba(20,184,166,0.4)",
        },
        navigation: navigation(&LEARNING_NAVIGATION),
        quick_actions: vec![
            nav("Submit Assignment", "/assignments"),
            nav("Join Class", "/schedule"),
            nav("Send Message", "/messages"),
        ],
    }
}

fn teacher() -> RoleProfile {
    let mut extra = LEARNING_NAVIGATION.to_vec();
    extra.push(nav("Reports", "/reports"));
    RoleProfile {
        role: Role::Teacher,
        label: "Teacher Portal",
        emoji: "👨‍🏫",
        greeting: "Ready to inspire minds today?",
        theme: Theme {
            background: "from-blue-600/20 via-indigo-500/20 to-purple-500/20",
            gradient: "from-teacher-500 to-orange-500",
            accent: "rgba(99,102,241,0.4)",
        },
        navigation: navigation(&extra),
        quick_actions: vec![
            nav("Create Assignment", "/assignments"),
            nav("Take Attendance", "/attendance"),
            nav("Post Announcement", "/messages"),
            nav("Upload Resource", "/resources"),
        ],
    }
}

fn admin() -> RoleProfile {
    RoleProfile {
        role: Role::Admin,
        label: "Admin Portal",
        emoji: "⚙️",
        greeting: "Managing the platform efficiently today?",
        theme: Theme {
            background: "from-purple-600/20 via-blue-600/20 to-indigo-600/20",
            gradient: "from-admin-500 to-purple-500",
            accent: "rgba(147,51,234,0.4)",
        },
        navigation: navigation(&[
            nav("Users", "/users"),
            nav("Admin Panel", "/admin"),
            nav("Reports", "/reports"),
            nav("Settings", "/settings"),
        ]),
        quick_actions: vec![
            nav("Add User", "/admin"),
            nav("Create Course", "/courses"),
            nav("Generate Report", "/reports"),
        ],
    }
}

/// Lookup from role to its profile. Covers every [`Role`].
#[derive(Debug, Clone)]
pub struct RoleTable {
    profiles: BTreeMap<Role, RoleProfile>,
}

impl RoleTable {
    #[must_use]
    pub fn standard() -> Self {
        let profiles = [student(), teacher(), admin()]
            .into_iter()
            .map(|profile| (profile.role, profile))
            .collect();
        Self { profiles }
    }

    /// ## Summary
    /// The profile for `role`.
    ///
    /// ## Panics
    /// Never for a table built by [`RoleTable::standard`], which covers every role.
    #[must_use]
    pub fn profile(&self, role: Role) -> &RoleProfile {
        &self.profiles[&role]
    }

    pub fn profiles(&self) -> impl Iterator<Item = &RoleProfile> {
        self.profiles.values()
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        Self::standard()
    }
}

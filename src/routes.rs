//! Navigation Targets
//!
//! Paths this app links to. Course pages are served elsewhere in the app.

use crate::models::Role;

pub const HOME: &str = "/";
pub const SIGN_IN: &str = "/sign-in";
pub const SIGN_UP: &str = "/sign-up";
pub const COURSES: &str = "/courses";

/// Detail page for one course
pub fn course_detail(id: &str) -> String {
    format!("{}/{}", COURSES, id)
}

/// Sign-up link preselecting a role
pub fn sign_up_as(role: Role) -> String {
    format!("{}?role={}", SIGN_UP, role.as_str())
}

//! UI Components
//!
//! Reusable Leptos components.

mod navbar;
mod hero;
mod featured_courses;
mod highlights;
mod footer;
mod auth_layout;

pub use navbar::Navbar;
pub use hero::Hero;
pub use featured_courses::FeaturedCourses;
pub use highlights::Highlights;
pub use footer::Footer;
pub use auth_layout::AuthLayout;

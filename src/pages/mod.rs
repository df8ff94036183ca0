//! Routed Pages

mod landing;
mod auth;

pub use landing::LandingPage;
pub use auth::{SignInPage, SignUpPage};

//! Footer Component
//!
//! Closing call to action and site links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Role;
use crate::routes;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <section class="cta reveal">
            <h2>"Ready to start learning?"</h2>
            <p>"Join thousands of learners and instructors today."</p>
            <A href=routes::sign_up_as(Role::Student) attr:class="btn btn-primary btn-lg">
                "Create Free Account"
            </A>
        </section>

        <footer class="site-footer">
            <span class="brand-name">"LearnHub"</span>
            <nav class="footer-links">
                <a href=routes::COURSES>"Courses"</a>
                <A href=routes::SIGN_IN>"Sign In"</A>
                <A href=routes::sign_up_as(Role::Instructor)>"Teach"</A>
            </nav>
            <span class="footer-note">"© LearnHub. All rights reserved."</span>
        </footer>
    }
}

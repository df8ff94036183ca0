//! Landing Navbar Component
//!
//! Fixed top bar that gains a solid background once the page is scrolled.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_scroll::{use_scroll_flag, DEFAULT_THRESHOLD};

use crate::routes;

#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = use_scroll_flag(DEFAULT_THRESHOLD);

    let navbar_class = move || {
        if scrolled.get() {
            "navbar scrolled"
        } else {
            "navbar"
        }
    };

    view! {
        <header class=navbar_class>
            <A href=routes::HOME attr:class="navbar-brand">
                <span class="brand-icon">"🎓"</span>
                <span class="brand-name">"LearnHub"</span>
            </A>

            <nav class="navbar-links">
                <a href=routes::COURSES>"Courses"</a>
                <a href="#features">"Features"</a>
            </nav>

            <div class="navbar-actions">
                <A href=routes::SIGN_IN attr:class="btn btn-ghost">"Sign In"</A>
                <A href=routes::SIGN_UP attr:class="btn btn-primary">"Get Started"</A>
            </div>
        </header>
    }
}

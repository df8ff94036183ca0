//! Hero Section Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Role;
use crate::routes;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-glow" aria-hidden="true"></div>
            <div class="hero-content reveal">
                <span class="hero-badge">"Learn anything, teach everything"</span>
                <h1 class="hero-title">
                    "Build skills that "
                    <span class="text-gradient">"move you forward"</span>
                </h1>
                <p class="hero-subtitle">
                    "Expert-led courses, hands-on projects and a community that keeps you going. Start free, learn at your own pace."
                </p>
                <div class="hero-actions">
                    <A href=routes::sign_up_as(Role::Student) attr:class="btn btn-primary btn-lg">
                        "Start Learning"
                    </A>
                    <A href=routes::sign_up_as(Role::Instructor) attr:class="btn btn-outline btn-lg">
                        "Become an Instructor"
                    </A>
                </div>
            </div>
        </section>
    }
}

//! Auth Layout Component
//!
//! Two-panel chrome shared by the sign-in and sign-up pages.
//! Purely visual: forms and credentials live in the children.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;

#[component]
pub fn AuthLayout(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-layout">
            <aside class="auth-brand">
                <A href=routes::HOME attr:class="navbar-brand">
                    <span class="brand-icon">"🎓"</span>
                    <span class="brand-name">"LearnHub"</span>
                </A>
                <blockquote class="auth-quote reveal">
                    "The beautiful thing about learning is that nobody can take it away from you."
                </blockquote>
            </aside>

            <main class="auth-panel">
                <div class="auth-card reveal">
                    <h1>{title}</h1>
                    <p class="auth-subtitle">{subtitle}</p>
                    {children()}
                </div>
            </main>
        </div>
    }
}

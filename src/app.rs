//! LMS Landing App
//!
//! Router and app-wide context.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{LandingPage, SignInPage, SignUpPage};
use crate::routes;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_document();
    log::info!("[APP] Document store project: {}", config.project_id);

    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/sign-in") view=SignInPage />
                <Route path=path!("/sign-up") view=SignUpPage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <A href=routes::HOME attr:class="btn btn-primary">"Back to home"</A>
        </div>
    }
}

//! Sign-in and Sign-up Pages
//!
//! Chrome only; account handling is provided by the auth service.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::components::AuthLayout;
use crate::models::Role;
use crate::routes;

#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <AuthLayout title="Welcome back" subtitle="Sign in to continue learning.">
            <div class="auth-slot" id="sign-in"></div>
            <p class="auth-switch">
                "New here? "
                <A href=routes::SIGN_UP>"Create an account"</A>
            </p>
        </AuthLayout>
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let query = use_query_map();
    let role = Memo::new(move |_| {
        query.with(|params| params.get("role")).and_then(|value| Role::from_query(&value))
    });

    let subtitle = move || match role.get() {
        Some(Role::Instructor) => "Share what you know with learners everywhere.",
        _ => "Start learning today. It's free.",
    };

    view! {
        <AuthLayout title="Create your account" subtitle="Join LearnHub">
            <p class="auth-role-hint">{subtitle}</p>
            <div class="role-tabs">
                {[Role::Student, Role::Instructor]
                    .into_iter()
                    .map(|option| {
                        let tab_class = move || {
                            if role.get() == Some(option) { "role-tab active" } else { "role-tab" }
                        };
                        view! {
                            <A href=routes::sign_up_as(option) attr:class=tab_class>
                                {option.label()}
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="auth-slot" id="sign-up"></div>
            <p class="auth-switch">
                "Already have an account? "
                <A href=routes::SIGN_IN>"Sign in"</A>
            </p>
        </AuthLayout>
    }
}

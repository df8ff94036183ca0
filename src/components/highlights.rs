//! Feature Highlights Component
//!
//! Static marketing copy, one card per highlight.

use leptos::prelude::*;

/// (icon, title, blurb)
const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("📚", "Expert Instructors", "Learn from practitioners who ship real work every day."),
    ("🕒", "Learn at Your Pace", "Lifetime access to every lesson, on any device."),
    ("🛠️", "Hands-on Projects", "Practice with exercises and projects reviewed by peers."),
    ("🏅", "Certificates", "Earn a certificate for every course you complete."),
];

#[component]
pub fn Highlights() -> impl IntoView {
    view! {
        <section class="highlights" id="features">
            <div class="section-header reveal">
                <h2>"Why learn with us"</h2>
            </div>
            <div class="highlight-grid">
                {HIGHLIGHTS
                    .iter()
                    .enumerate()
                    .map(|(i, (icon, title, blurb))| {
                        view! {
                            <div class="highlight-card reveal" style=crate::display::reveal_style(i)>
                                <div class="highlight-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

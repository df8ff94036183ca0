//! Featured Courses Component
//!
//! Grid of up to three promoted courses and the link to the full catalogue.

use leptos::prelude::*;

use crate::display::{featured_section, CourseCard};
use crate::models::FeaturedItem;

#[component]
pub fn FeaturedCourses(featured: ReadSignal<Vec<FeaturedItem>>) -> impl IntoView {
    let section = Memo::new(move |_| featured.with(|items| featured_section(items)));

    view! {
        <section class="featured" id="courses">
            <div class="section-header reveal">
                <h2>"Featured Courses"</h2>
                <p>"Hand-picked by our instructors to get you started."</p>
            </div>

            <div class="course-grid">
                <For
                    each=move || section.get().cards
                    key=|card| card.id.clone()
                    children=move |card| view! { <CourseCardView card=card /> }
                />
            </div>

            <div class="featured-footer">
                <a class="btn btn-outline" href=move || section.get().view_all_href>
                    {move || section.get().view_all_label}
                </a>
            </div>
        </section>
    }
}

#[component]
fn CourseCardView(card: CourseCard) -> impl IntoView {
    view! {
        <a class="course-card reveal" href=card.href style=card.reveal_style>
            <div class="course-thumb">
                <img src=card.thumbnail alt=card.title.clone() loading="lazy" />
                <span class="course-price">{card.price_label}</span>
            </div>
            <div class="course-body">
                <h3 class="course-title">{card.title}</h3>
                <p class="course-description">{card.description}</p>
            </div>
        </a>
    }
}

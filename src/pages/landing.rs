//! Landing Page
//!
//! Marketing page; loads the featured courses once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FeaturedCourses, Footer, Hero, Highlights, Navbar};
use crate::context::use_app_context;
use crate::loader;
use crate::models::FeaturedItem;

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_app_context();
    let (featured, set_featured) = signal(Vec::<FeaturedItem>::new());

    // Tracks nothing, so this runs once after mount
    Effect::new(move |_| {
        let store = ctx.store();
        spawn_local(async move {
            let items = loader::load_featured(&store).await;
            // Page may be gone by now; the result is dropped then
            let _ = set_featured.try_set(items);
        });
    });

    view! {
        <div class="landing">
            <Navbar />
            <Hero />
            <FeaturedCourses featured=featured />
            <Highlights />
            <Footer />
        </div>
    }
}

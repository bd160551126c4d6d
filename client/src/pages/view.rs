//! Public view page for one website.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::site_canvas::SiteCanvas;
use crate::util::bootstrap::load_blocks;

/// Read-only rendering of the website named by the route.
#[component]
pub fn ViewPage() -> impl IntoView {
    let params = use_params_map();
    if super::website_id(params.read_untracked().get("id")).is_none() {
        return view! { <p class="page-error">"Unknown website."</p> }.into_any();
    }
    let blocks = load_blocks();

    view! {
        <main class="site-page">
            <SiteCanvas blocks/>
        </main>
    }
    .into_any()
}

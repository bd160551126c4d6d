//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::SiteConfig;
use crate::pages::{editor::EditorPage, view::ViewPage};

/// Root application component.
///
/// Provides the site configuration and sets up client-side routing. Page
/// state is provided by each page since it depends on the route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteConfig::load());

    view! {
        <Stylesheet id="site-builder" href="/static/css/site_builder.css"/>
        <Title text="Site builder"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("edit"), ParamSegment("id")) view=EditorPage/>
                <Route path=(StaticSegment("view"), ParamSegment("id")) view=ViewPage/>
            </Routes>
        </Router>
    }
}

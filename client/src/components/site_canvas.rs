//! Public rendering of a saved site.
//!
//! DESIGN
//! ======
//! Blocks keep their absolute desktop geometry until the viewport drops to
//! the configured breakpoint, where the site either stacks them in order or
//! scales the whole layout to fit. Window resizes are debounced: each resize
//! replaces the pending timeout, which cancels the previous one.

use canvas::doc::{Block, BlockStore};
use canvas::geom::Rect;
use canvas::render::{block_style, canvas_style};
use canvas::responsive::{LayoutPlan, plan_layout};
use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;

use super::block_content::{BlockContent, ContentProps};
use crate::config::SiteConfig;
use crate::util::pointer::{element_rect, viewport_width};

/// Every block of a site, laid out for the current viewport.
#[component]
pub fn SiteCanvas(blocks: Vec<Block>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let canvas_ref = NodeRef::<leptos::html::Div>::new();
    let store = RwSignal::new({
        let mut store = BlockStore::new();
        store.load_snapshot(blocks.clone(), (0.0, 0.0));
        store
    });
    let plan = RwSignal::new(LayoutPlan::Desktop);
    let pending = StoredValue::new_local(None::<Timeout>);

    let relayout = move || {
        let Some(el) = canvas_ref.get_untracked() else {
            return;
        };
        let container = el
            .parent_element()
            .map_or_else(viewport_width, |parent| element_rect(&parent).width);
        let rects: Vec<Rect> = store.with_untracked(|s| s.ordered().iter().map(|b| b.rect).collect());
        let next = plan_layout(viewport_width(), config.breakpoint_px, config.responsive, &rects, container);
        if plan.get_untracked() != next {
            log::debug!("layout: {next:?}");
            plan.set(next);
        }
    };

    // Resolve percentage sizes against the mounted canvas, then lay out.
    Effect::new(move || {
        if let Some(el) = canvas_ref.get() {
            let rect = element_rect(&el);
            store.update(|s| s.load_snapshot(blocks.clone(), (rect.width, rect.height)));
            relayout();
        }
    });

    let listener = window_event_listener(ev::resize, move |_| {
        let timeout = Timeout::new(config.resize_debounce_ms, relayout);
        pending.set_value(Some(timeout));
    });
    on_cleanup(move || listener.remove());

    view! {
        <div
            class="site-canvas"
            class:site-canvas--stacked=move || plan.get() == LayoutPlan::Stacked
            class:site-canvas--scaled=move || matches!(plan.get(), LayoutPlan::Scaled(_))
            node_ref=canvas_ref
            style=move || canvas_style(&plan.get())
        >
            <For
                each=move || store.with(BlockStore::ordered_ids)
                key=|id| *id
                children=move |id| {
                    let style = move || {
                        store.with(|s| s.get(id).map(|b| block_style(b, &plan.get())).unwrap_or_default())
                    };
                    let content = store.with_untracked(|s| {
                        s.get(id).map(|b| ContentProps {
                            kind: b.kind,
                            data: b.data.clone(),
                            proportional: b.proportional,
                            fit: b.fit,
                        })
                    });
                    view! {
                        <div class="site-block" attr:data-block-id=id.to_string() style=style>
                            {content.map(|content| view! {
                                <BlockContent content slide_interval_ms=config.default_slide_interval_ms/>
                            })}
                        </div>
                    }
                }
            />
        </div>
    }
}

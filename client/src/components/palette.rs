//! Palette of block kinds that can be dragged onto the canvas.
//!
//! DESIGN
//! ======
//! The pending kind lives in the engine rather than in the drag payload, so
//! a drop that did not start here (a file, a link) creates nothing.

use canvas::doc::BlockKind;
use leptos::prelude::*;

use crate::state::editor::EditorState;

/// Drag payload format written for the browser's benefit.
const DRAG_FORMAT: &str = "text/plain";

/// Sidebar listing one draggable button per block kind.
#[component]
pub fn Palette() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let items = BlockKind::ALL
        .into_iter()
        .map(|kind| {
            let on_drag_start = move |ev: leptos::ev::DragEvent| {
                if let Some(transfer) = ev.data_transfer() {
                    if transfer.set_data(DRAG_FORMAT, kind.as_str()).is_err() {
                        log::debug!("drag payload not set for {kind}");
                    }
                }
                editor.update(|s| s.core.begin_palette_drag(kind));
            };
            let on_drag_end = move |_ev: leptos::ev::DragEvent| {
                editor.update(|s| s.core.end_palette_drag());
            };

            view! {
                <button
                    class="palette__item"
                    draggable="true"
                    attr:data-block-type=kind.as_str()
                    on:dragstart=on_drag_start
                    on:dragend=on_drag_end
                >
                    {kind.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <aside class="palette">
            <h2 class="palette__title">"Blocks"</h2>
            {items}
        </aside>
    }
}

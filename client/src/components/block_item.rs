//! One block on the editor canvas: wrapper, resize handles, size badge.

use canvas::doc::BlockId;
use canvas::handle::Handle;
use canvas::render::{block_style, size_badge_label};
use canvas::responsive::LayoutPlan;
use leptos::ev;
use leptos::prelude::*;

use super::block_content::{BlockContent, ContentProps};
use super::block_controls::BlockControls;
use super::editor_canvas::{CanvasNode, SessionSlot, process_actions, start_session};
use crate::config::SiteConfig;
use crate::state::editor::EditorState;
use crate::util::pointer::{button, client_point, element_rect, target_within};

/// Elements inside a block that must not start a move.
const NO_MOVE_SELECTOR: &str = ".block-controls, .resize-handle, .slider__btn, .slider__indicator";

/// Positioned wrapper for block `id`.
#[component]
pub fn BlockItem(id: BlockId) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let config = expect_context::<SiteConfig>();
    let CanvasNode(canvas_ref) = expect_context::<CanvasNode>();
    let slot: SessionSlot = StoredValue::new_local(None);

    let Some(kind) = editor.with_untracked(|s| s.core.block(id).map(|b| b.kind)) else {
        return ().into_any();
    };

    let selected = move || editor.with(|s| s.core.selection() == Some(id));
    let style = move || {
        editor.with(|s| {
            s.core
                .block(id)
                .map(|b| block_style(b, &LayoutPlan::Desktop))
                .unwrap_or_default()
        })
    };
    let content = Memo::new(move |_| {
        editor.with(|s| {
            s.core.block(id).map(|b| ContentProps {
                kind: b.kind,
                data: b.data.clone(),
                proportional: b.proportional,
                fit: b.fit,
            })
        })
    });
    let badge = move || {
        editor
            .with(|s| s.core.size_badge())
            .filter(|(badge_id, ..)| *badge_id == id)
            .map(|(_, w, h)| size_badge_label(w, h))
    };

    let on_pointer_down = move |ev: ev::PointerEvent| {
        if target_within(&ev, NO_MOVE_SELECTOR) {
            return;
        }
        let Some(pressed) = button(&ev) else {
            return;
        };
        let Some(el) = canvas_ref.get_untracked() else {
            return;
        };
        let canvas = element_rect(&el);
        let point = client_point(&ev);
        let actions = editor
            .try_update(|s| s.core.begin_move(id, point, pressed, canvas))
            .unwrap_or_default();
        if editor.with_untracked(|s| s.core.input.block_id() == Some(id)) {
            ev.prevent_default();
            start_session(editor, slot);
        }
        process_actions(actions);
    };

    let handles = move || {
        selected().then(|| {
            Handle::ALL
                .into_iter()
                .map(|handle| {
                    let on_handle_down = move |ev: ev::PointerEvent| {
                        ev.stop_propagation();
                        let Some(pressed) = button(&ev) else {
                            return;
                        };
                        let point = client_point(&ev);
                        let actions = editor
                            .try_update(|s| s.core.begin_resize(id, handle, point, pressed))
                            .unwrap_or_default();
                        if editor.with_untracked(|s| s.core.input.block_id() == Some(id)) {
                            ev.prevent_default();
                            start_session(editor, slot);
                        }
                        process_actions(actions);
                    };
                    view! {
                        <div
                            class=format!("resize-handle resize-handle--{}", handle.token())
                            style=format!("cursor: {};", handle.cursor())
                            attr:data-handle=handle.token()
                            on:pointerdown=on_handle_down
                        ></div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div
            class="block-item"
            class:block-item--selected=selected
            attr:data-block-id=id.to_string()
            attr:data-block-type=kind.as_str()
            style=style
            on:pointerdown=on_pointer_down
        >
            <BlockControls id kind/>
            <div class="block-item__content">
                {move || {
                    content
                        .get()
                        .map(|content| {
                            view! {
                                <BlockContent
                                    content
                                    slide_interval_ms=config.default_slide_interval_ms
                                    editing=true
                                />
                            }
                        })
                }}
            </div>
            {handles}
            {move || badge().map(|label| view! { <div class="size-badge">{label}</div> })}
        </div>
    }
    .into_any()
}

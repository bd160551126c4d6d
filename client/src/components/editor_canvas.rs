//! Editor canvas: drop target for the palette and host for block items.
//!
//! SYSTEM CONTEXT
//! ==============
//! The canvas is the bridge between browser events and `EngineCore`. Pointer
//! sessions install window-level move/up/cancel listeners for their own
//! duration so a drag keeps tracking outside the block; the listeners are
//! removed when the pointer is released or the browser cancels it. Engine
//! actions are carried out by [`process_actions`].

use canvas::engine::Action;
use leptos::ev;
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::block_item::BlockItem;
use crate::net::api;
use crate::state::editor::EditorState;
use crate::util::dialog;
use crate::util::pointer::{client_point, element_rect};

/// Canvas element shared with block items for move clamping.
#[derive(Clone, Copy)]
pub struct CanvasNode(pub NodeRef<leptos::html::Div>);

/// Window listeners for one live move or resize session.
pub struct SessionListeners {
    moved: WindowListenerHandle,
    released: WindowListenerHandle,
    cancelled: WindowListenerHandle,
}

impl SessionListeners {
    fn remove(self) {
        self.moved.remove();
        self.released.remove();
        self.cancelled.remove();
    }
}

/// Slot holding the listeners of the session a block started.
pub type SessionSlot = StoredValue<Option<SessionListeners>, LocalStorage>;

/// Track the pointer on the window until it is released.
pub fn start_session(editor: RwSignal<EditorState>, slot: SessionSlot) {
    end_session(slot);

    let moved = window_event_listener(ev::pointermove, move |e: web_sys::PointerEvent| {
        let point = client_point(&e);
        let actions = editor.try_update(|s| s.core.pointer_move(point)).unwrap_or_default();
        if actions.is_empty() {
            return;
        }
        let log_frame = editor
            .try_update_untracked(|s| s.should_log_move(js_sys::Date::now()))
            .unwrap_or(false);
        if log_frame {
            log::debug!("pointer frame: {actions:?}");
        }
    });

    let released = window_event_listener(ev::pointerup, move |_e: web_sys::PointerEvent| {
        end_session(slot);
        let actions = editor.try_update(|s| s.core.pointer_up()).unwrap_or_default();
        process_actions(actions);
    });

    // Touch scrolling and lost capture end the gesture without a save.
    let cancelled = window_event_listener(ev::pointercancel, move |_e: web_sys::PointerEvent| {
        end_session(slot);
        let actions = editor.try_update(|s| s.core.pointer_cancel()).unwrap_or_default();
        process_actions(actions);
    });

    slot.set_value(Some(SessionListeners { moved, released, cancelled }));
}

fn end_session(slot: SessionSlot) {
    if let Some(listeners) = slot.try_update_value(Option::take).flatten() {
        listeners.remove();
    }
}

/// Carry out engine actions: persist patches, log the rest.
pub fn process_actions(actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::Persist { id, patch } => {
                spawn_local(async move {
                    match api::merge_and_update(id, &patch).await {
                        Ok(()) => log::debug!("block {id} saved"),
                        Err(e) => {
                            log::warn!("saving block {id} failed: {e}");
                            dialog::alert(&e.user_message("save the block"));
                        }
                    }
                });
            }
            Action::SelectionChanged(id) => log::debug!("selection: {id:?}"),
            Action::GeometryChanged { .. } => {}
        }
    }
}

/// Canvas surface with every block of the page.
#[component]
pub fn EditorCanvas() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let canvas_ref = NodeRef::<leptos::html::Div>::new();
    provide_context(CanvasNode(canvas_ref));

    // Percentage sizes resolve against the canvas, so reload once it exists.
    Effect::new(move || {
        if let Some(el) = canvas_ref.get() {
            let rect = element_rect(&el);
            editor.update(|s| s.measure_canvas(rect.width, rect.height));
        }
    });

    let on_drag_over = move |ev: ev::DragEvent| ev.prevent_default();

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        let Some(el) = canvas_ref.get_untracked() else {
            return;
        };
        let canvas = element_rect(&el);
        let point = client_point(&ev);
        let Some(request) = editor.try_update(|s| s.core.drop_block(point, canvas)).flatten() else {
            log::debug!("drop ignored: no palette drag in progress");
            return;
        };
        let website_id = editor.with_untracked(|s| s.website_id);
        spawn_local(async move {
            match api::create_block(website_id, &request).await {
                Ok(_) => dialog::reload(),
                Err(e) => {
                    log::warn!("creating {} block failed: {e}", request.block_type);
                    dialog::alert(&e.user_message("create the block"));
                }
            }
        });
    };

    let on_pointer_down = move |ev: ev::PointerEvent| {
        if ev.target() == ev.current_target() {
            let actions = editor.try_update(|s| s.core.select(None)).unwrap_or_default();
            process_actions(actions);
        }
    };

    view! {
        <div
            class="editor-canvas"
            node_ref=canvas_ref
            on:dragover=on_drag_over
            on:drop=on_drop
            on:pointerdown=on_pointer_down
        >
            <For
                each=move || editor.with(EditorState::block_ids)
                key=|id| *id
                children=move |id| view! { <BlockItem id/> }
            />
        </div>
    }
}

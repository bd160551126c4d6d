//! Per-block toolbar: edit, delete, aspect lock and stacking order.
//!
//! ERROR HANDLING
//! ==============
//! Failed deletes keep the block and alert. A failed reorder alerts and
//! reloads, since local order has already been renumbered.

use canvas::doc::{BlockId, BlockKind};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::edit_modal::open_editor;
use super::editor_canvas::process_actions;
use crate::net::api;
use crate::state::editor::EditorState;
use crate::state::modal::ModalState;
use crate::util::dialog;

/// Controls shown on top of a block.
#[component]
pub fn BlockControls(id: BlockId, kind: BlockKind) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let modal = expect_context::<RwSignal<ModalState>>();

    let proportional = move || editor.with(|s| s.core.block(id).is_some_and(|b| b.proportional));

    let on_edit = move |_ev: leptos::ev::MouseEvent| open_editor(modal, id, kind);

    let on_delete = move |_ev: leptos::ev::MouseEvent| {
        if !dialog::confirm(&format!("Delete this {} block?", kind.label())) {
            return;
        }
        spawn_local(async move {
            match api::delete_block(id).await {
                Ok(()) => {
                    log::info!("block {id} deleted");
                    editor.update(|s| s.core.apply_delete(id));
                }
                Err(e) => {
                    log::warn!("deleting block {id} failed: {e}");
                    dialog::alert(&e.user_message("delete the block"));
                }
            }
        });
    };

    let on_toggle = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        let actions = editor
            .try_update(|s| s.core.set_proportional(id, checked))
            .unwrap_or_default();
        process_actions(actions);
    };

    view! {
        <div class="block-controls">
            <span class="block-controls__label">{kind.label()}</span>
            <button class="block-controls__btn" title="Edit" on:click=on_edit>
                "Edit"
            </button>
            <button class="block-controls__btn" title="Bring forward" on:click=move |_| shift(editor, id, 1)>
                "▲"
            </button>
            <button class="block-controls__btn" title="Send backward" on:click=move |_| shift(editor, id, -1)>
                "▼"
            </button>
            <label class="block-controls__toggle" title="Keep aspect ratio">
                <input type="checkbox" prop:checked=proportional on:change=on_toggle/>
                "Lock ratio"
            </label>
            <button class="block-controls__btn block-controls__btn--danger" title="Delete" on:click=on_delete>
                "✕"
            </button>
        </div>
    }
}

/// Move a block one step in stacking order and persist the new order.
fn shift(editor: RwSignal<EditorState>, id: BlockId, delta: isize) {
    let Some(entries) = editor.try_update(|s| s.core.shift_order(id, delta)).flatten() else {
        return;
    };
    let website_id = editor.with_untracked(|s| s.website_id);
    spawn_local(async move {
        match api::reorder_blocks(website_id, &entries).await {
            Ok(()) => log::debug!("order saved for website {website_id}"),
            Err(e) => {
                log::warn!("reordering blocks failed: {e}");
                dialog::alert(&e.user_message("save the block order"));
                dialog::reload();
            }
        }
    });
}

//! Editor page: palette, canvas and edit modal for one website.
//!
//! ARCHITECTURE
//! ============
//! The page owns the `EditorState` and `ModalState` signals and provides
//! them to every component below it. Changes that create or rewrite blocks
//! reload the page to resync with the server; geometry and order changes
//! are applied locally and persisted in the background.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::edit_modal::EditModal;
use crate::components::editor_canvas::EditorCanvas;
use crate::components::palette::Palette;
use crate::state::editor::EditorState;
use crate::state::modal::ModalState;
use crate::util::bootstrap::load_blocks;

/// Editor for the website named by the route.
#[component]
pub fn EditorPage() -> impl IntoView {
    let params = use_params_map();
    let Some(website_id) = super::website_id(params.read_untracked().get("id")) else {
        return view! { <p class="page-error">"Unknown website."</p> }.into_any();
    };

    let editor = RwSignal::new(EditorState::new(website_id, load_blocks()));
    let modal = RwSignal::new(ModalState::default());
    provide_context(editor);
    provide_context(modal);
    log::info!("editing website {website_id} with {} blocks", editor.with_untracked(|s| s.core.store.len()));

    view! {
        <Title text=format!("Editing site {website_id}")/>
        <div class="editor-page">
            <header class="editor-page__header">
                <h1 class="editor-page__title">"Site editor"</h1>
                <a class="btn" href=format!("/view/{website_id}/") target="_blank">
                    "Preview"
                </a>
            </header>
            <div class="editor-page__body">
                <Palette/>
                <EditorCanvas/>
            </div>
            <EditModal/>
        </div>
    }
    .into_any()
}

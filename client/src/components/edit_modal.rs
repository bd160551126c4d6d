//! Modal form for editing a block's content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opening fetches the block so the form starts from server data. Inputs
//! write raw strings into the `EditSession`; saving validates them, uploads
//! a chosen image first (an upload failure aborts the save), merges the
//! result over the fetched record and reloads the page.
//!
//! The form is rebuilt only when a different block is opened. Keystrokes
//! update the session without re-rendering the inputs.

use canvas::doc::{BlockId, BlockKind};
use canvas::form::{FieldSpec, InputKind, Upload};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::net::api;
use crate::state::modal::{EditSession, ModalState, seed_image_url};
use crate::util::dialog;

/// Start editing block `id`: fetch its data, then open the form.
pub fn open_editor(modal: RwSignal<ModalState>, id: BlockId, kind: BlockKind) {
    if !modal.try_update(|m| m.request(id, kind)).unwrap_or(false) {
        return;
    }
    spawn_local(async move {
        match api::fetch_block(id).await {
            Ok(block) => {
                let data = seed_image_url(block.data, block.image_url);
                modal.update(|m| {
                    m.loaded(id, data);
                });
            }
            Err(e) => {
                log::warn!("loading block {id} failed: {e}");
                modal.update(ModalState::close);
                dialog::alert(&e.user_message("load the block"));
            }
        }
    });
}

/// Apply `f` to the open session if it still belongs to `id`.
fn with_session(modal: RwSignal<ModalState>, id: BlockId, f: impl FnOnce(&mut EditSession)) {
    modal.update(|m| {
        if let Some(session) = m.session_mut().filter(|s| s.id == id) {
            f(session);
        }
    });
}

/// Overlay with the edit form of the open block.
#[component]
pub fn EditModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    let visible = Memo::new(move |_| modal.with(|m| !m.is_closed()));
    let loading = Memo::new(move |_| modal.with(|m| matches!(m, ModalState::Loading { .. })));
    let open = Memo::new(move |_| modal.with(|m| m.session().map(|s| (s.id, s.kind))));

    let on_overlay = move |ev: leptos::ev::MouseEvent| {
        if ev.target() == ev.current_target() {
            modal.update(ModalState::close);
        }
    };

    view! {
        <Show when=move || visible.get()>
            <div class="modal-overlay" on:click=on_overlay>
                <div class="modal">
                    <Show when=move || loading.get()>
                        <p class="modal__loading">"Loading…"</p>
                    </Show>
                    {move || open.get().map(|(id, kind)| edit_form(modal, id, kind))}
                </div>
            </div>
        </Show>
    }
}

fn edit_form(modal: RwSignal<ModalState>, id: BlockId, kind: BlockKind) -> AnyView {
    let Some(schema) = modal.with_untracked(|m| m.session().map(EditSession::schema)) else {
        return ().into_any();
    };
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let fields = schema.fields.iter().map(|spec| field_view(modal, id, spec)).collect_view();

    let upload = match schema.upload {
        Upload::None => ().into_any(),
        Upload::Single => view! {
            <label class="form-field">
                <span class="form-field__label">"Upload image"</span>
                <input type="file" accept="image/*" class="form-field__input" node_ref=file_ref/>
            </label>
        }
        .into_any(),
        Upload::Gallery => gallery_view(modal, id).into_any(),
    };

    let error = move || modal.with(|m| m.session().and_then(|s| s.error.clone()));
    let busy = move || modal.with(|m| m.session().is_some_and(|s| s.busy));

    view! {
        <h2 class="modal__title">{schema.title}</h2>
        <form class="modal__form" on:submit=move |ev| {
            ev.prevent_default();
            save(modal, id, kind, file_ref);
        }>
            {fields}
            {upload}
            {move || error().map(|message| view! { <p class="modal__error">{message}</p> })}
            <div class="modal__actions">
                <button type="button" class="btn" on:click=move |_| modal.update(ModalState::close)>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn--primary" disabled=busy>
                    {move || if busy() { "Saving…" } else { "Save" }}
                </button>
            </div>
        </form>
    }
    .into_any()
}

fn field_view(modal: RwSignal<ModalState>, id: BlockId, spec: &'static FieldSpec) -> impl IntoView {
    let initial = modal
        .with_untracked(|m| m.session().map(|s| s.value(spec.name).to_owned()))
        .unwrap_or_default();
    let set = move |value: String| with_session(modal, id, |s| s.set_value(spec.name, value));

    let input = match spec.input {
        InputKind::Text => view! {
            <input type="text" class="form-field__input" prop:value=initial on:input=move |ev| set(event_target_value(&ev))/>
        }
        .into_any(),
        InputKind::TextArea { rows } => view! {
            <textarea class="form-field__input" rows=rows.to_string() prop:value=initial on:input=move |ev| set(event_target_value(&ev))></textarea>
        }
        .into_any(),
        InputKind::Select(choices) => {
            let options = choices
                .iter()
                .map(|c| view! { <option value=c.value selected={c.value == initial}>{c.label}</option> })
                .collect_view();
            view! {
                <select class="form-field__input" on:change=move |ev| set(event_target_value(&ev))>{options}</select>
            }
            .into_any()
        }
        InputKind::Number { min, step } => view! {
            <input
                type="number"
                class="form-field__input"
                min=min.to_string()
                step=step.to_string()
                prop:value=initial
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
        InputKind::Checkbox => {
            let checked = initial == "true";
            view! {
                <input type="checkbox" prop:checked=checked on:change=move |ev| set(event_target_checked(&ev).to_string())/>
            }
            .into_any()
        }
    };

    view! {
        <label class="form-field" class:form-field--inline={matches!(spec.input, InputKind::Checkbox)}>
            <span class="form-field__label">{spec.label}</span>
            {input}
        </label>
    }
}

/// Slider image list: thumbnails with remove buttons, multi-file upload and
/// add-by-URL.
fn gallery_view(modal: RwSignal<ModalState>, id: BlockId) -> impl IntoView {
    let files_ref = NodeRef::<leptos::html::Input>::new();
    let url_ref = NodeRef::<leptos::html::Input>::new();

    let slides = move || {
        modal
            .with(|m| m.session().map(|s| s.slides.images().to_vec()))
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, url)| {
                view! {
                    <div class="gallery__item">
                        <img class="gallery__thumb" src=url alt=format!("Slide {}", index + 1)/>
                        <button
                            type="button"
                            class="gallery__remove"
                            title="Remove"
                            on:click=move |_| {
                                with_session(modal, id, |s| {
                                    s.slides.remove(index);
                                });
                            }
                        >
                            "✕"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    let on_files = move |_ev: leptos::ev::Event| {
        let Some(input) = files_ref.get_untracked() else {
            return;
        };
        let files: Vec<web_sys::File> = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        input.set_value("");
        if files.is_empty() {
            return;
        }
        with_session(modal, id, |s| s.busy = true);
        spawn_local(async move {
            let results = futures::future::join_all(files.iter().map(|file| api::upload_image(id, file))).await;
            let mut urls = Vec::new();
            let mut first_error = None;
            for result in results {
                match result {
                    Ok(url) => urls.push(url),
                    Err(e) => {
                        log::warn!("slide upload for block {id} failed: {e}");
                        first_error.get_or_insert(e);
                    }
                }
            }
            with_session(modal, id, |s| {
                for url in &urls {
                    s.slides.push(url);
                }
                s.busy = false;
            });
            if let Some(e) = first_error {
                dialog::alert(&e.user_message("upload an image"));
            }
        });
    };

    let on_add_url = move |_ev: leptos::ev::MouseEvent| {
        let Some(input) = url_ref.get_untracked() else {
            return;
        };
        let url = input.value();
        let added = modal
            .try_update(|m| m.session_mut().filter(|s| s.id == id).is_some_and(|s| s.slides.push(url.trim())))
            .unwrap_or(false);
        if added {
            input.set_value("");
        }
    };

    view! {
        <div class="gallery">
            <span class="form-field__label">"Slides"</span>
            <div class="gallery__items">{slides}</div>
            <label class="form-field">
                <span class="form-field__label">"Upload images"</span>
                <input type="file" accept="image/*" multiple=true class="form-field__input" node_ref=files_ref on:change=on_files/>
            </label>
            <div class="gallery__add">
                <input type="text" class="form-field__input" placeholder="Image URL" node_ref=url_ref/>
                <button type="button" class="btn" on:click=on_add_url>
                    "Add"
                </button>
            </div>
        </div>
    }
}

/// Validate, upload the chosen image if any, then save the merged record.
fn save(modal: RwSignal<ModalState>, id: BlockId, kind: BlockKind, file_ref: NodeRef<leptos::html::Input>) {
    let checked = modal.with_untracked(|m| m.session().map(|s| s.build_data(None)));
    match checked {
        None => return,
        Some(Err(e)) => {
            with_session(modal, id, |s| s.error = Some(e.to_string()));
            return;
        }
        Some(Ok(_)) => {}
    }

    let file = if kind == BlockKind::Image {
        file_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|list| list.get(0))
    } else {
        None
    };

    with_session(modal, id, |s| {
        s.error = None;
        s.busy = true;
    });
    spawn_local(async move {
        let uploaded = match file {
            Some(file) => match api::upload_image(id, &file).await {
                Ok(url) => Some(url),
                Err(e) => {
                    log::warn!("image upload for block {id} failed: {e}");
                    with_session(modal, id, |s| s.busy = false);
                    dialog::alert(&e.user_message("upload the image"));
                    return;
                }
            },
            None => None,
        };

        let built = modal.with_untracked(|m| m.session().filter(|s| s.id == id).map(|s| s.build_data(uploaded.as_deref())));
        let Some(Ok(data)) = built else {
            with_session(modal, id, |s| s.busy = false);
            return;
        };

        match api::update_block(id, &data).await {
            Ok(()) => {
                log::info!("block {id} updated");
                modal.update(ModalState::close);
                dialog::reload();
            }
            Err(e) => {
                log::warn!("updating block {id} failed: {e}");
                with_session(modal, id, |s| s.busy = false);
                dialog::alert(&e.user_message("save the block"));
            }
        }
    });
}

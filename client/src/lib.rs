//! # client
//!
//! Leptos + WASM front end for the visual site builder.
//!
//! The editor page lets an author drag blocks from a palette onto a canvas,
//! move and resize them, and edit their content in a modal. The view page
//! renders the saved site with responsive layout and runs image sliders.
//! Block geometry, forms and styles come from the `canvas` crate; this crate
//! owns the DOM, the REST calls and the reactive state around them.

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
pub mod components;
pub mod config;
pub mod net;
#[cfg(feature = "csr")]
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and logger, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}

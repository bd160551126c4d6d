//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Editor components read and write the `EditorState` and `ModalState`
//! signals provided by the editor page; `site_canvas` renders the public
//! view. Block content and sliders are shared by both.

pub mod block_content;
pub mod block_controls;
pub mod block_item;
pub mod edit_modal;
pub mod editor_canvas;
pub mod palette;
pub mod site_canvas;
pub mod slider;

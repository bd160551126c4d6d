//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (cookies, dialogs, pointer
//! coordinates, embedded page data) from page and component logic.

pub mod bootstrap;
pub mod cookie;
#[cfg(feature = "csr")]
pub mod dialog;
#[cfg(feature = "csr")]
pub mod pointer;

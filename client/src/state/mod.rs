//! Reactive state models shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! These types carry no browser handles, so every transition is unit-tested
//! without a DOM. Components wrap them in `RwSignal`s.

pub mod editor;
pub mod modal;

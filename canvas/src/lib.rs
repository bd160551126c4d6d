//! Block model, gesture engine, and layout logic for the site builder.
//!
//! This crate holds everything about the editor and the public view that
//! does not need a browser: block state, the move/resize state machine,
//! palette drops, slider navigation, responsive planning, the edit-form
//! schema, and the inline styles applied to each element. The `client`
//! crate wires DOM events to [`engine::EngineCore`] and persists the
//! resulting [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`], actions, resize/move math |
//! | [`doc`] | Block types, tolerant data access, and the block store |
//! | [`geom`] | Points and rectangles in canvas pixels |
//! | [`handle`] | The eight resize handles |
//! | [`input`] | Mouse buttons and the gesture state machine |
//! | [`slider`] | Carousel navigation and autoplay settings |
//! | [`responsive`] | Small-screen stack/scale layout planning |
//! | [`form`] | Per-kind edit-form schema and value collection |
//! | [`render`] | Inline style builders |
//! | [`consts`] | Shared numeric constants (minimum sizes, offsets, timings) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod form;
pub mod geom;
pub mod handle;
pub mod input;
pub mod render;
pub mod responsive;
pub mod slider;

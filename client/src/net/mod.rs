//! Networking modules for the block REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the CRUD calls, `types` defines the wire schema, and
//! `error` is the failure taxonomy every call returns.

pub mod api;
pub mod error;
pub mod types;

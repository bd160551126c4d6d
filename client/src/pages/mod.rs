//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads its website id from the route and the block snapshot
//! from the host page, then delegates rendering to `components`.

pub mod editor;
pub mod view;

/// Website id from the `id` route segment. Ids are positive.
fn website_id(raw: Option<String>) -> Option<i64> {
    raw?.parse::<i64>().ok().filter(|id| *id > 0)
}

//! Shared numeric constants for the canvas crate.

// ── Geometry ────────────────────────────────────────────────────

/// Smallest width a block can be resized to, in pixels.
pub const MIN_BLOCK_WIDTH: f64 = 100.0;

/// Smallest height a block can be resized to, in pixels.
pub const MIN_BLOCK_HEIGHT: f64 = 50.0;

/// Width given to blocks created from the palette or missing a stored width.
pub const DEFAULT_BLOCK_WIDTH: f64 = 300.0;

/// Height given to blocks created from the palette or missing a stored height.
pub const DEFAULT_BLOCK_HEIGHT: f64 = 200.0;

/// Horizontal offset subtracted from a palette drop so the new block lands
/// roughly centered under the cursor.
pub const DROP_OFFSET_X: f64 = 75.0;

/// Vertical counterpart of [`DROP_OFFSET_X`].
pub const DROP_OFFSET_Y: f64 = 50.0;

/// Diagonal step used to stagger blocks that have no stored position.
pub const STAGGER_STEP: f64 = 30.0;

// ── Responsive layout ───────────────────────────────────────────

/// Viewport width (inclusive) at or below which the mobile layout applies.
pub const RESPONSIVE_BREAKPOINT_PX: f64 = 768.0;

/// Quiet period before a window resize re-runs the layout.
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

// ── Slider ──────────────────────────────────────────────────────

/// Autoplay period used when a slider has no valid interval.
pub const DEFAULT_SLIDE_INTERVAL_MS: u32 = 3000;

/// Smallest interval the edit form accepts for slider autoplay.
pub const MIN_SLIDE_INTERVAL_MS: i64 = 1000;

//! Small-screen layout planning for the public view.
//!
//! Below the breakpoint a site either stacks its blocks in normal flow or
//! scales the whole canvas down uniformly. Above it the absolute layout from
//! block state is used unchanged.

#[cfg(test)]
#[path = "responsive_test.rs"]
mod responsive_test;

use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// Configured small-screen behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponsiveMode {
    /// Blocks flow vertically at full width.
    #[default]
    Stack,
    /// The canvas is scaled to fit the container.
    Scale,
}

impl ResponsiveMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Scale => "scale",
        }
    }

    /// Parse a mode string; anything unknown reads as `Stack`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("scale") { Self::Scale } else { Self::Stack }
    }
}

/// Bounding box and factor for the scaled layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFit {
    /// Union of all block rects.
    pub bounds: Rect,
    /// Uniform factor, never above 1.
    pub scale: f64,
}

/// How the canvas should be laid out for the current viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutPlan {
    /// Absolute positioning from block state.
    Desktop,
    /// Normal flow, full width, auto height.
    Stacked,
    /// Uniform scale; `None` when the canvas has no blocks.
    Scaled(Option<ScaleFit>),
}

/// Choose a layout. `container_width` is the width available to the canvas.
#[must_use]
pub fn plan_layout(viewport_width: f64, breakpoint: f64, mode: ResponsiveMode, blocks: &[Rect], container_width: f64) -> LayoutPlan {
    if viewport_width > breakpoint {
        return LayoutPlan::Desktop;
    }
    match mode {
        ResponsiveMode::Stack => LayoutPlan::Stacked,
        ResponsiveMode::Scale => LayoutPlan::Scaled(Rect::bounding(blocks).map(|bounds| {
            let width = bounds.width.max(1.0);
            let scale = (container_width / width).min(1.0);
            ScaleFit { bounds, scale }
        })),
    }
}

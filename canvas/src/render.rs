//! Inline style builders for blocks, the canvas, and block content.
//!
//! Everything here is a pure function from typed state to a CSS declaration
//! string, so the browser layer only assigns `style` attributes and never
//! computes geometry itself.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::doc::{BlockProps, BlockState, FitMode};
use crate::responsive::LayoutPlan;

/// Media element kinds that receive fit styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaElement {
    Image,
    Video,
    Frame,
}

/// Inline style for a block wrapper.
#[must_use]
pub fn block_style(block: &BlockState, plan: &LayoutPlan) -> String {
    match plan {
        LayoutPlan::Stacked => "position: relative; left: auto; top: auto; width: 100%; height: auto;".to_owned(),
        LayoutPlan::Desktop | LayoutPlan::Scaled(_) => {
            let r = block.rect;
            format!(
                "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; z-index: {};",
                r.x,
                r.y,
                r.width,
                r.height,
                block.order + 1
            )
        }
    }
}

/// Inline style for the canvas element under a layout plan.
#[must_use]
pub fn canvas_style(plan: &LayoutPlan) -> String {
    match plan {
        LayoutPlan::Desktop | LayoutPlan::Scaled(None) => String::new(),
        LayoutPlan::Stacked => "height: auto; display: flex; flex-direction: column;".to_owned(),
        LayoutPlan::Scaled(Some(fit)) => {
            let b = fit.bounds;
            format!(
                "width: {}px; height: {}px; transform: scale({}) translate({}px, {}px); transform-origin: top left;",
                b.width, b.height, fit.scale, -b.x, -b.y
            )
        }
    }
}

/// Inline style for an `img`, `video` or `iframe` inside a block.
///
/// Proportional blocks scale media without distortion inside the box; free
/// blocks stretch it to the box and let `object-fit` decide the crop.
#[must_use]
pub fn media_style(element: MediaElement, proportional: bool, fit: FitMode) -> String {
    let size = if proportional {
        "width: auto; height: auto; max-width: 100%; max-height: 100%;"
    } else {
        "width: 100%; height: 100%;"
    };
    let margin = match (element, proportional) {
        (MediaElement::Image, true) => " margin: 0 auto;",
        (MediaElement::Image, false) => " margin: 0;",
        _ => "",
    };
    format!("{size} object-fit: {}; display: block;{margin}", fit.as_str())
}

/// Whether a video URL is a provider embed page that needs an `iframe`
/// rather than a `video` element.
#[must_use]
pub fn is_embed_url(url: &str) -> bool {
    url.contains("/embed/") || url.contains("player.vimeo.com/")
}

/// Text shown in the size badge while resizing.
#[must_use]
pub fn size_badge_label(width: i64, height: i64) -> String {
    format!("{width}×{height} px")
}

/// Style for a paragraph block.
#[must_use]
pub fn text_style(props: &BlockProps<'_>) -> String {
    format!("font-size: {}; text-align: {};", props.css_length("size"), props.align())
}

/// Style for a heading block.
#[must_use]
pub fn heading_style(props: &BlockProps<'_>) -> String {
    format!("text-align: {};", props.align())
}

fn button_preset(style: &str) -> &'static str {
    match style {
        "secondary" => "background: #e5e7eb; color: #374151;",
        "success" => "background: #10b981; color: white;",
        "danger" => "background: #ef4444; color: white;",
        _ => "background: linear-gradient(135deg, #8b5cf6 0%, #7c3aed 100%); color: white;",
    }
}

fn button_size(size: &str) -> &'static str {
    match size {
        "small" => "padding: 0.5rem 1rem; font-size: 0.875rem;",
        "large" => "padding: 1rem 2rem; font-size: 1.125rem;",
        _ => "padding: 0.75rem 1.5rem; font-size: 1rem;",
    }
}

/// Style for the link inside a button block. A custom background replaces
/// the preset; the custom text color then defaults to white. Invalid colors
/// and lengths are ignored.
#[must_use]
pub fn button_style(props: &BlockProps<'_>) -> String {
    let colors = match props.css_color("bg_color") {
        Some(bg) => format!("background: {bg}; color: {};", props.css_color("text_color").unwrap_or("white")),
        None => button_preset(props.text("style")).to_owned(),
    };
    format!(
        "{colors} {} border-radius: {}; text-decoration: none; display: inline-block; font-weight: 600;",
        button_size(props.text("size")),
        props.css_length("border_radius")
    )
}

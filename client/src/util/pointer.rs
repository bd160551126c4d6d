//! DOM event and element geometry conversions into canvas-crate types.

use canvas::geom::{Point, Rect};
use canvas::input::Button;

/// Viewport position of a mouse or pointer event.
pub fn client_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// The event's button, if it is one the engine knows.
pub fn button(ev: &web_sys::MouseEvent) -> Option<Button> {
    Button::from_code(ev.button())
}

/// Bounding client rect of an element.
pub fn element_rect(el: &web_sys::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Whether the event started inside an element matching `selector`.
pub fn target_within(ev: &web_sys::Event, selector: &str) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#![allow(clippy::float_cmp)]

use super::*;

fn resize(start: Rect) -> ResizeSession {
    ResizeSession { id: 1, handle: Handle::Se, start_pointer: Point::new(0.0, 0.0), start, proportional: true }
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_code(0), Some(Button::Primary));
    assert_eq!(Button::from_code(1), Some(Button::Middle));
    assert_eq!(Button::from_code(2), Some(Button::Secondary));
    assert_eq!(Button::from_code(3), None);
    assert_eq!(Button::from_code(-1), None);
}

// =============================================================
// ResizeSession
// =============================================================

#[test]
fn aspect_is_width_over_height() {
    assert_eq!(resize(Rect::new(0.0, 0.0, 400.0, 200.0)).aspect(), 2.0);
}

#[test]
fn aspect_of_degenerate_rect_is_square() {
    assert_eq!(resize(Rect::new(0.0, 0.0, 100.0, 0.0)).aspect(), 1.0);
    assert_eq!(resize(Rect::new(0.0, 0.0, 0.0, 0.0)).aspect(), 1.0);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn default_is_idle() {
    let state = InputState::default();
    assert!(state.is_idle());
    assert_eq!(state.block_id(), None);
}

#[test]
fn active_sessions_report_their_block() {
    let moving = InputState::Moving(MoveSession {
        id: 9,
        grab_offset: Point::new(5.0, 5.0),
        canvas: Rect::new(0.0, 0.0, 800.0, 600.0),
        start: Rect::new(0.0, 0.0, 300.0, 200.0),
    });
    assert!(!moving.is_idle());
    assert_eq!(moving.block_id(), Some(9));

    let resizing = InputState::Resizing(resize(Rect::new(0.0, 0.0, 10.0, 10.0)));
    assert_eq!(resizing.block_id(), Some(1));
}

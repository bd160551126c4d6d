//! Input model: mouse buttons and the gesture state machine.
//!
//! `InputState` is the gesture tracked between pointer-down and pointer-up.
//! Each active variant carries everything needed to compute the next frame's
//! geometry from the current pointer position alone, so pointer-move handling
//! is a pure function of the session and the pointer.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::BlockId;
use crate::geom::{Point, Rect};
use crate::handle::Handle;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code. Extra buttons are ignored.
    #[must_use]
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// An active move gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveSession {
    pub id: BlockId,
    /// Pointer offset from the block's top-left corner at press time.
    pub grab_offset: Point,
    /// Canvas bounding rect in viewport coordinates at press time.
    pub canvas: Rect,
    /// Block geometry at press time.
    pub start: Rect,
}

/// An active resize gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub id: BlockId,
    pub handle: Handle,
    /// Viewport pointer position at press time.
    pub start_pointer: Point,
    /// Block geometry at press time.
    pub start: Rect,
    /// Aspect lock, captured when the gesture began.
    pub proportional: bool,
}

impl ResizeSession {
    /// Starting width over height; a degenerate start reads as square.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        let aspect = self.start.width / self.start.height;
        if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 }
    }
}

/// Internal state for the input state machine.
///
/// At most one session exists at a time; a new press is ignored until the
/// current session ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A block is following the pointer.
    Moving(MoveSession),
    /// A block is being resized from one of its handles.
    Resizing(ResizeSession),
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The block the active session targets.
    #[must_use]
    pub fn block_id(&self) -> Option<BlockId> {
        match self {
            Self::Idle => None,
            Self::Moving(s) => Some(s.id),
            Self::Resizing(s) => Some(s.id),
        }
    }
}

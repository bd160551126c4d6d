//! Editor engine: block state plus the gesture state machine.
//!
//! `EngineCore` owns everything the editor page mutates in response to user
//! input and contains no browser types, so every gesture can be driven from
//! unit tests. Handlers return [`Action`]s for the host to carry out
//! (persisting geometry, creating blocks); the host never mutates block state
//! directly while a session is live.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::consts::{DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_WIDTH, DROP_OFFSET_X, DROP_OFFSET_Y, MIN_BLOCK_HEIGHT, MIN_BLOCK_WIDTH};
use crate::doc::{Block, BlockId, BlockKind, BlockState, BlockStore, FitMode, OrderEntry};
use crate::geom::{Point, Rect};
use crate::handle::Handle;
use crate::input::{Button, InputState, MoveSession, ResizeSession};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Selection moved to a different block (or was cleared).
    SelectionChanged(Option<BlockId>),
    /// A block's geometry changed during a live session.
    GeometryChanged { id: BlockId, rect: Rect },
    /// Merge `patch` into the stored block data.
    Persist { id: BlockId, patch: Map<String, Value> },
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateBlock {
    pub block_type: BlockKind,
    pub data: Value,
}

impl CreateBlock {
    /// A default-sized block of `kind` with its top-left corner at `origin`.
    #[must_use]
    pub fn at(kind: BlockKind, origin: Point) -> Self {
        let mut data = Map::new();
        data.insert("position_x".into(), Value::from(origin.x as i64));
        data.insert("position_y".into(), Value::from(origin.y as i64));
        data.insert("width".into(), Value::from(DEFAULT_BLOCK_WIDTH as i64));
        data.insert("height".into(), Value::from(DEFAULT_BLOCK_HEIGHT as i64));
        data.insert("proportional".into(), Value::Bool(kind.default_proportional()));
        data.insert("fit".into(), Value::from(FitMode::default().as_str()));
        Self { block_type: kind, data: Value::Object(data) }
    }
}

/// Core engine state for the editor page.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub store: BlockStore,
    pub input: InputState,
    pub selected: Option<BlockId>,
    /// Block kind being dragged from the palette, if any.
    pub palette: Option<BlockKind>,
    /// Last measured canvas size, used to resolve percentage dimensions.
    pub canvas_size: (f64, f64),
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Hydrate block state from a page snapshot.
    pub fn load_snapshot(&mut self, blocks: Vec<Block>) {
        self.store.load_snapshot(blocks, self.canvas_size);
        self.input = InputState::Idle;
        if self.selected.is_some_and(|id| self.store.get(id).is_none()) {
            self.selected = None;
        }
        log::debug!("loaded {} blocks", self.store.len());
    }

    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_size = (width, height);
    }

    /// Forget a deleted block. Ends any session targeting it.
    pub fn apply_delete(&mut self, id: BlockId) {
        self.store.remove(id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.input.block_id() == Some(id) {
            self.input = InputState::Idle;
        }
    }

    // --- Selection and controls ---

    /// Select a block. Unknown ids clear the selection.
    pub fn select(&mut self, id: Option<BlockId>) -> Vec<Action> {
        let id = id.filter(|id| self.store.get(*id).is_some());
        if self.selected == id {
            return Vec::new();
        }
        self.selected = id;
        vec![Action::SelectionChanged(id)]
    }

    /// Flip the aspect lock and return the field to persist.
    pub fn set_proportional(&mut self, id: BlockId, proportional: bool) -> Vec<Action> {
        let Some(block) = self.store.get_mut(id) else {
            return Vec::new();
        };
        block.proportional = proportional;
        let mut patch = Map::new();
        patch.insert("proportional".into(), Value::Bool(proportional));
        vec![Action::Persist { id, patch }]
    }

    /// Move a block one step forward (`+1`) or backward (`-1`) in render order.
    pub fn shift_order(&mut self, id: BlockId, delta: isize) -> Option<Vec<OrderEntry>> {
        self.store.shift_order(id, delta)
    }

    // --- Palette drag-create ---

    pub fn begin_palette_drag(&mut self, kind: BlockKind) {
        self.palette = Some(kind);
    }

    pub fn end_palette_drag(&mut self) {
        self.palette = None;
    }

    /// Drop the pending palette block at a viewport pointer position. Returns
    /// the create request, or `None` when no palette drag is active.
    pub fn drop_block(&mut self, pointer: Point, canvas: Rect) -> Option<CreateBlock> {
        let kind = self.palette.take()?;
        let origin = drop_origin(pointer, canvas);
        log::debug!("drop {kind} at ({}, {})", origin.x, origin.y);
        Some(CreateBlock::at(kind, origin))
    }

    // --- Gestures ---

    /// Start moving `id`. Ignored unless the primary button was pressed while
    /// no other session is live.
    pub fn begin_move(&mut self, id: BlockId, pointer: Point, button: Button, canvas: Rect) -> Vec<Action> {
        if button != Button::Primary || !self.input.is_idle() {
            return Vec::new();
        }
        let Some(block) = self.store.get(id) else {
            return Vec::new();
        };
        let grab_offset = Point::new(pointer.x - canvas.x - block.rect.x, pointer.y - canvas.y - block.rect.y);
        self.input = InputState::Moving(MoveSession { id, grab_offset, canvas, start: block.rect });
        self.canvas_size = (canvas.width, canvas.height);
        log::debug!("move session started for block {id}");
        self.select(Some(id))
    }

    /// Start resizing `id` from `handle`. Same entry rules as [`Self::begin_move`].
    pub fn begin_resize(&mut self, id: BlockId, handle: Handle, pointer: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || !self.input.is_idle() {
            return Vec::new();
        }
        let Some(block) = self.store.get(id) else {
            return Vec::new();
        };
        self.input = InputState::Resizing(ResizeSession {
            id,
            handle,
            start_pointer: pointer,
            start: block.rect,
            proportional: block.proportional,
        });
        log::debug!("resize session started for block {id} from {}", handle.token());
        self.select(Some(id))
    }

    /// Advance the live session to a new viewport pointer position.
    pub fn pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        let (id, next) = match &self.input {
            InputState::Idle => return Vec::new(),
            InputState::Moving(session) => {
                let Some(block) = self.store.get(session.id) else {
                    return Vec::new();
                };
                let origin = move_origin(session, pointer, block.rect);
                (session.id, Rect::new(origin.x, origin.y, block.rect.width, block.rect.height))
            }
            InputState::Resizing(session) => (session.id, resize_rect(session, pointer)),
        };
        let Some(block) = self.store.get_mut(id) else {
            return Vec::new();
        };
        if block.rect == next {
            return Vec::new();
        }
        block.rect = next;
        vec![Action::GeometryChanged { id, rect: next }]
    }

    /// End the live session and emit the geometry to persist.
    pub fn pointer_up(&mut self) -> Vec<Action> {
        let Some(id) = self.input.block_id() else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        let Some(block) = self.store.get_mut(id) else {
            return Vec::new();
        };
        block.rect = block.rect.rounded();
        log::debug!("session ended for block {id}");
        vec![Action::Persist { id, patch: block.geometry_patch() }]
    }

    /// Abandon the live session without persisting and put the block back
    /// where it started. Used when the browser cancels the pointer.
    pub fn pointer_cancel(&mut self) -> Vec<Action> {
        let (id, start) = match &self.input {
            InputState::Idle => return Vec::new(),
            InputState::Moving(session) => (session.id, session.start),
            InputState::Resizing(session) => (session.id, session.start),
        };
        self.input = InputState::Idle;
        log::debug!("session cancelled for block {id}");
        let Some(block) = self.store.get_mut(id) else {
            return Vec::new();
        };
        if block.rect == start {
            return Vec::new();
        }
        block.rect = start;
        vec![Action::GeometryChanged { id, rect: start }]
    }

    // --- Queries ---

    #[must_use]
    pub fn selection(&self) -> Option<BlockId> {
        self.selected
    }

    #[must_use]
    pub fn block(&self, id: BlockId) -> Option<&BlockState> {
        self.store.get(id)
    }

    /// Size badge for the block being resized: `(id, width, height)` rounded.
    #[must_use]
    pub fn size_badge(&self) -> Option<(BlockId, i64, i64)> {
        let InputState::Resizing(session) = &self.input else {
            return None;
        };
        let rect = self.store.get(session.id)?.rect.rounded();
        Some((session.id, rect.width as i64, rect.height as i64))
    }
}

/// Canvas-relative top-left for a palette drop: the pointer minus the
/// centering offset, clamped to the canvas origin and rounded.
#[must_use]
pub fn drop_origin(pointer: Point, canvas: Rect) -> Point {
    Point::new(
        (pointer.x - canvas.x - DROP_OFFSET_X).max(0.0).round(),
        (pointer.y - canvas.y - DROP_OFFSET_Y).max(0.0).round(),
    )
}

/// Top-left for a moved block, kept inside the canvas. When the canvas is
/// smaller than the block the lower bound wins.
#[must_use]
pub fn move_origin(session: &MoveSession, pointer: Point, block: Rect) -> Point {
    let canvas = session.canvas;
    let left = pointer.x - canvas.x - session.grab_offset.x;
    let top = pointer.y - canvas.y - session.grab_offset.y;
    Point::new(
        left.min(canvas.width - block.width).max(0.0),
        top.min(canvas.height - block.height).max(0.0),
    )
}

/// Geometry for a resize session at `pointer`.
///
/// Free resizing floors width and height independently. Proportional
/// resizing lets one axis drive (the dominant delta on corners, the handle's
/// own axis on edges), floors it so the derived axis also clears its minimum,
/// and derives the other from the start aspect ratio. West and north handles
/// keep the opposite edge fixed.
#[must_use]
pub fn resize_rect(session: &ResizeSession, pointer: Point) -> Rect {
    let dx = pointer.x - session.start_pointer.x;
    let dy = pointer.y - session.start_pointer.y;
    let start = session.start;
    let handle = session.handle;

    let mut width = start.width;
    let mut height = start.height;
    if handle.east() {
        width += dx;
    } else if handle.west() {
        width -= dx;
    }
    if handle.south() {
        height += dy;
    } else if handle.north() {
        height -= dy;
    }

    if session.proportional {
        let aspect = session.aspect();
        let width_drives = if handle.is_corner() { dx.abs() > dy.abs() } else { handle.east() || handle.west() };
        if width_drives {
            width = width.max(MIN_BLOCK_WIDTH).max(MIN_BLOCK_HEIGHT * aspect);
            height = (width / aspect).round();
        } else {
            height = height.max(MIN_BLOCK_HEIGHT).max(MIN_BLOCK_WIDTH / aspect);
            width = (height * aspect).round();
        }
    } else {
        width = width.max(MIN_BLOCK_WIDTH);
        height = height.max(MIN_BLOCK_HEIGHT);
    }

    let x = if handle.west() { start.x + start.width - width } else { start.x };
    let y = if handle.north() { start.y + start.height - height } else { start.y };
    Rect::new(x, y, width, height)
}

//! Editor-page state: the website being edited and the block engine.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use canvas::doc::{Block, BlockId};
use canvas::engine::EngineCore;

/// State behind the editor page.
#[derive(Clone, Debug, Default)]
pub struct EditorState {
    /// Website the blocks belong to (route parameter).
    pub website_id: i64,
    /// Block state, selection, palette drag and the live gesture.
    pub core: EngineCore,
    /// Snapshot embedded in the page, kept to re-resolve sizes once the
    /// canvas has been measured.
    pub snapshot: Vec<Block>,
    /// Time of the last logged move frame, in ms since epoch.
    pub last_move_log_ms: f64,
}

impl EditorState {
    #[must_use]
    pub fn new(website_id: i64, snapshot: Vec<Block>) -> Self {
        let mut core = EngineCore::new();
        core.load_snapshot(snapshot.clone());
        Self { website_id, core, snapshot, last_move_log_ms: 0.0 }
    }

    /// Record the measured canvas size and reload the snapshot against it.
    /// Ignored while a gesture is live.
    pub fn measure_canvas(&mut self, width: f64, height: f64) {
        if !self.core.input.is_idle() || self.core.canvas_size == (width, height) {
            return;
        }
        self.core.set_canvas_size(width, height);
        self.core.load_snapshot(self.snapshot.clone());
    }

    /// Block ids in render order.
    #[must_use]
    pub fn block_ids(&self) -> Vec<BlockId> {
        self.core.store.ordered_ids()
    }

    /// Whether a move frame at `now_ms` should be logged (at most every 300 ms).
    pub fn should_log_move(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_move_log_ms < MOVE_LOG_INTERVAL_MS {
            return false;
        }
        self.last_move_log_ms = now_ms;
        true
    }
}

/// Minimum spacing between logged move frames.
pub const MOVE_LOG_INTERVAL_MS: f64 = 300.0;

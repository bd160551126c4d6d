//! Carousel state for slider blocks, shared by the editor and the public view.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

use serde_json::Value;

use crate::doc::{BlockKind, BlockProps};

/// Autoplay settings read from a slider's data record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderConfig {
    pub autoplay: bool,
    pub interval_ms: u32,
}

impl SliderConfig {
    /// Read settings; `fallback_interval_ms` applies when no valid interval is stored.
    #[must_use]
    pub fn from_data(data: &Value, fallback_interval_ms: u32) -> Self {
        let props = BlockProps::new(BlockKind::Slider, data);
        Self { autoplay: props.autoplay(), interval_ms: props.interval_ms_or(fallback_interval_ms) }
    }
}

/// Index of the active slide. Slides and indicators share the index, so at
/// most one of each is ever active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    slide_count: usize,
    active: usize,
}

impl SliderState {
    #[must_use]
    pub fn new(slide_count: usize) -> Self {
        Self { slide_count, active: 0 }
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.slide_count > 0 && index == self.active
    }

    /// Activate slide `index`. Out-of-range indices are rejected.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.slide_count {
            return false;
        }
        self.active = index;
        true
    }

    /// Step `direction` slides, wrapping around both ends.
    pub fn change(&mut self, direction: i64) -> bool {
        let Ok(count) = i64::try_from(self.slide_count) else {
            return false;
        };
        if count == 0 {
            return false;
        }
        let Ok(active) = i64::try_from(self.active) else {
            return false;
        };
        let next = (active + direction).rem_euclid(count);
        match usize::try_from(next) {
            Ok(next) => self.go_to(next),
            Err(_) => false,
        }
    }

    /// Autoplay step.
    pub fn tick(&mut self) -> bool {
        self.change(1)
    }

    /// Whether an autoplay timer should run for this slider.
    #[must_use]
    pub fn wants_timer(&self, config: SliderConfig) -> bool {
        config.autoplay && self.slide_count > 1
    }
}

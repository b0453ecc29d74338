//! Scroll controller.
//!
//! Responsibilities:
//! - Turn wheel input into a clamped scroll offset.
//! - Collect the wheel steps that arrive during one frame.
//!
//! Does NOT handle:
//! - Computing the scroll range (see `layout::max_scroll`).
//! - Reading terminal events (see `app` module).
//!
//! Invariants:
//! - `advance` always returns a value in `0..=max_scroll`.
//! - Positive wheel delta (wheel up) decreases the offset.

use keyz_config::constants::SCROLL_SPEED;

use crate::layout::clamp_scroll;

/// Applies one frame's wheel delta to `current` and clamps the result.
pub fn advance(current: f32, wheel_delta: f32, max_scroll: f32) -> f32 {
    clamp_scroll(current - wheel_delta * SCROLL_SPEED, max_scroll)
}

/// Sums wheel steps between frames so the controller runs once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelAccumulator {
    delta: f32,
}

impl WheelAccumulator {
    pub fn push(&mut self, delta: f32) {
        self.delta += delta;
    }

    /// Returns the accumulated delta and resets it to zero.
    pub fn take(&mut self) -> f32 {
        std::mem::take(&mut self.delta)
    }

    pub fn is_idle(&self) -> bool {
        self.delta == 0.0
    }
}

//! Pointer-chasing cursor pair.
//!
//! A tight dot and a loose ring chase the pointer with exponential
//! smoothing. For these two visuals `offset_x`/`offset_y` carry absolute
//! screen position in fractional cells - trail elements have no resting
//! layout position to be offset from.

use std::time::Duration;

use spark_signals::Signal;

use crate::ease::smooth_factor;
use crate::scheduler::{Tick, TickError, Tickable};
use crate::visual::Visual;

/// Per-reference-frame catch-up fraction of the dot.
const DOT_FACTOR: f32 = 0.8;
/// Per-reference-frame catch-up fraction of the trailing ring.
const RING_FACTOR: f32 = 0.15;

/// Continuous pointer chase.
pub struct CursorTrail {
    dot: Visual,
    ring: Visual,
    target: Signal<(f32, f32)>,
    dot_pos: (f32, f32),
    ring_pos: (f32, f32),
}

impl CursorTrail {
    /// `target` is the pointer-position signal maintained by the pointer
    /// state module.
    pub fn new(dot: Visual, ring: Visual, target: Signal<(f32, f32)>) -> Self {
        let start = target.get();
        Self { dot, ring, target, dot_pos: start, ring_pos: start }
    }
}

fn chase(pos: (f32, f32), target: (f32, f32), alpha: f32) -> (f32, f32) {
    (
        pos.0 + (target.0 - pos.0) * alpha,
        pos.1 + (target.1 - pos.1) * alpha,
    )
}

impl Tickable for CursorTrail {
    fn update(&mut self, dt: Duration) -> Result<Tick, TickError> {
        let target = self.target.get();

        self.dot_pos = chase(self.dot_pos, target, smooth_factor(DOT_FACTOR, dt));
        self.ring_pos = chase(self.ring_pos, target, smooth_factor(RING_FACTOR, dt));

        self.dot.offset_x.set(self.dot_pos.0);
        self.dot.offset_y.set(self.dot_pos.1);
        self.ring.offset_x.set(self.ring_pos.0);
        self.ring.offset_y.set(self.ring_pos.1);

        Ok(Tick::Continue)
    }
}

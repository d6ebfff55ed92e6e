//! Blob-morph effect: corner radii drifting on overlapping sine waves.

use std::time::Duration;

use crate::scheduler::{Tick, TickError, Tickable};
use crate::types::CornerRadii;
use crate::visual::Visual;

/// Continuously morphs an element's corner rounding.
///
/// Three sine waves at incommensurate frequencies are mixed into the four
/// radii, so the shape wanders without a visible repeat period. Speed is
/// per-instance; neighbouring shapes given slightly different speeds drift
/// out of phase.
pub struct MorphShape {
    visual: Visual,
    time: f32,
    speed: f32,
}

impl MorphShape {
    /// Create a morph over `visual`. `speed` of 1.0 is the base rate;
    /// typical instances use 0.5..1.0.
    pub fn new(visual: Visual, speed: f32) -> Self {
        Self { visual, time: 0.0, speed }
    }
}

impl Tickable for MorphShape {
    fn update(&mut self, dt: Duration) -> Result<Tick, TickError> {
        self.time += self.speed * dt.as_secs_f32();

        let m1 = (self.time).sin() * 0.5 + 0.5;
        let m2 = (self.time * 1.3).cos() * 0.5 + 0.5;
        let m3 = (self.time * 0.7).sin() * 0.5 + 0.5;

        self.visual.radii.set(CornerRadii([
            (0.60 + m1 * 0.40).min(1.0),
            (0.40 + m2 * 0.20).min(1.0),
            (0.30 + m3 * 0.40).min(1.0),
            (0.70 + m1 * 0.30).min(1.0),
        ]));

        Ok(Tick::Continue)
    }
}

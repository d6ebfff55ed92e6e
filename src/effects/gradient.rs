//! Hue-shifting background gradient.

use std::time::Duration;

use crate::scheduler::{Tick, TickError, Tickable};
use crate::types::Rgba;
use crate::visual::{GradientStops, Visual};

/// Degrees of hue rotation per second at speed 1.0.
const HUE_RATE: f32 = 30.0;

/// Lightness/chroma of the generated stops. OKLCH keeps perceived
/// brightness constant while the hue travels.
const STOP_L: f32 = 0.62;
const STOP_C: f32 = 0.17;

/// Rotates a three-stop background gradient around the hue wheel.
///
/// The stops sit 120 degrees apart, so the band always spans a full
/// triad; `bg` is kept at the middle stop for hosts that paint flat.
pub struct GradientShift {
    visual: Visual,
    time: f32,
    speed: f32,
}

impl GradientShift {
    pub fn new(visual: Visual, speed: f32) -> Self {
        Self { visual, time: 0.0, speed }
    }

    fn stop(hue: f32) -> Rgba {
        Rgba::oklch(STOP_L, STOP_C, hue.rem_euclid(360.0), 255)
    }
}

impl Tickable for GradientShift {
    fn update(&mut self, dt: Duration) -> Result<Tick, TickError> {
        self.time += self.speed * dt.as_secs_f32();
        let hue = (self.time * HUE_RATE).rem_euclid(360.0);

        let stops = GradientStops([
            Self::stop(hue),
            Self::stop(hue + 120.0),
            Self::stop(hue + 240.0),
        ]);
        self.visual.bg.set(stops.0[1]);
        self.visual.gradient.set(stops);

        Ok(Tick::Continue)
    }
}

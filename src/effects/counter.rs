//! Eased count-up.

use std::time::Duration;

use crate::ease::Easing;
use crate::scheduler::{Tick, TickError, Tickable};
use crate::util::group_digits;
use crate::visual::Visual;

/// Default count-up duration.
pub const DURATION: Duration = Duration::from_secs(2);

/// Counts an element's text from zero to a target, decelerating so the
/// last digits settle slowly. Publishes thousands-grouped text and lands
/// exactly on the target.
pub struct CountUp {
    visual: Visual,
    target: u64,
    duration: Duration,
    elapsed: Duration,
}

impl CountUp {
    pub fn new(visual: Visual, target: u64) -> Self {
        Self::with_duration(visual, target, DURATION)
    }

    pub fn with_duration(visual: Visual, target: u64, duration: Duration) -> Self {
        visual.text.set(group_digits(0));
        Self { visual, target, duration, elapsed: Duration::ZERO }
    }
}

impl Tickable for CountUp {
    fn update(&mut self, dt: Duration) -> Result<Tick, TickError> {
        self.elapsed += dt;

        if self.elapsed >= self.duration {
            self.visual.text.set(group_digits(self.target));
            return Ok(Tick::Done);
        }

        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let value = (Easing::OutCubic.apply(t) * self.target as f32) as u64;
        self.visual.text.set(group_digits(value));

        Ok(Tick::Continue)
    }
}

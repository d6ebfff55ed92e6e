//! Smooth-scroll tween.

use std::time::Duration;

use spark_signals::Signal;

use crate::ease::{EASE_SMOOTH, lerp};
use crate::scheduler::{Tick, TickError, Tickable};

/// Default glide duration for anchor jumps and back-to-top.
pub const DURATION: Duration = Duration::from_millis(600);

/// Glides a scroll-offset signal to a target row, then retires.
///
/// Registering a new tween under the same scheduler key naturally cancels
/// an in-flight one - last click wins.
pub struct ScrollTween {
    offset: Signal<f32>,
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
}

impl ScrollTween {
    /// Tween `offset` from its current value to `to`.
    pub fn new(offset: Signal<f32>, to: f32) -> Self {
        Self::with_duration(offset, to, DURATION)
    }

    pub fn with_duration(offset: Signal<f32>, to: f32, duration: Duration) -> Self {
        let from = offset.get();
        Self { offset, from, to, duration, elapsed: Duration::ZERO }
    }
}

impl Tickable for ScrollTween {
    fn update(&mut self, dt: Duration) -> Result<Tick, TickError> {
        self.elapsed += dt;

        if self.elapsed >= self.duration {
            self.offset.set(self.to);
            return Ok(Tick::Done);
        }

        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.offset.set(lerp(self.from, self.to, EASE_SMOOTH.apply(t)));

        Ok(Tick::Continue)
    }
}

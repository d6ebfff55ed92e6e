//! Click ripple.

use std::time::Duration;

use spark_signals::{Signal, signal};

use crate::ease::Easing;
use crate::scheduler::{Tick, TickError, Tickable};

/// Lifetime of a ripple.
pub const DURATION: Duration = Duration::from_millis(600);

/// Peak ring opacity at spawn.
const START_OPACITY: f32 = 0.3;

/// An expanding, fading ring spawned at a click position. Retires itself
/// when fully faded; hosts drop their signal clones when it does.
pub struct Ripple {
    center: (f32, f32),
    radius: Signal<f32>,
    opacity: Signal<f32>,
    max_radius: f32,
    elapsed: Duration,
}

impl Ripple {
    /// Spawn at `center`, growing to `max_radius` cells.
    pub fn new(center: (f32, f32), max_radius: f32) -> Self {
        Self {
            center,
            radius: signal(0.0),
            opacity: signal(START_OPACITY),
            max_radius,
            elapsed: Duration::ZERO,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        self.center
    }

    pub fn radius(&self) -> Signal<f32> {
        self.radius.clone()
    }

    pub fn opacity(&self) -> Signal<f32> {
        self.opacity.clone()
    }
}

impl Tickable for Ripple {
    fn update(&mut self, dt: Duration) -> Result<Tick, TickError> {
        self.elapsed += dt;
        let t = (self.elapsed.as_secs_f32() / DURATION.as_secs_f32()).min(1.0);

        self.radius.set(Easing::OutCubic.apply(t) * self.max_radius);
        self.opacity.set(START_OPACITY * (1.0 - t));

        if self.elapsed >= DURATION {
            Ok(Tick::Done)
        } else {
            Ok(Tick::Continue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grows_and_fades() {
        let mut fx = Ripple::new((10.0, 5.0), 20.0);
        let radius = fx.radius();
        let opacity = fx.opacity();

        fx.update(Duration::from_millis(100)).unwrap();
        let r1 = radius.get();
        let o1 = opacity.get();
        assert!(r1 > 0.0);
        assert!(o1 < START_OPACITY);

        fx.update(Duration::from_millis(200)).unwrap();
        assert!(radius.get() > r1);
        assert!(opacity.get() < o1);
    }

    #[test]
    fn test_retires_fully_faded() {
        let mut fx = Ripple::new((0.0, 0.0), 12.0);
        let radius = fx.radius();
        let opacity = fx.opacity();

        let mut last = Tick::Continue;
        for _ in 0..50 {
            last = fx.update(Duration::from_millis(16)).unwrap();
            if last == Tick::Done {
                break;
            }
        }

        assert_eq!(last, Tick::Done);
        assert_eq!(radius.get(), 12.0);
        assert_eq!(opacity.get(), 0.0);
    }
}

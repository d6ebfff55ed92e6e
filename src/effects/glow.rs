//! Pulsing glow.

use std::time::Duration;

use crate::scheduler::{Tick, TickError, Tickable};
use crate::visual::Visual;

/// Breathes an element's glow intensity between 0.4 and 1.0.
///
/// Hosts typically render glow as foreground brightness
/// (`fg.dim(0.6 + glow * 0.6)`) or as a halo character ramp.
pub struct GlowPulse {
    visual: Visual,
    time: f32,
}

impl GlowPulse {
    pub fn new(visual: Visual) -> Self {
        Self { visual, time: 0.0 }
    }
}

impl Tickable for GlowPulse {
    fn update(&mut self, dt: Duration) -> Result<Tick, TickError> {
        self.time += dt.as_secs_f32();
        let intensity = (self.time * 2.0).sin() * 0.3 + 0.7;
        self.visual.glow.set(intensity);
        Ok(Tick::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_midpoint() {
        let visual = Visual::new();
        let mut fx = GlowPulse::new(visual.clone());
        fx.update(Duration::ZERO).unwrap();
        assert!((visual.glow.get() - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_intensity_bounds() {
        let visual = Visual::new();
        let mut fx = GlowPulse::new(visual.clone());

        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for _ in 0..600 {
            fx.update(Duration::from_millis(16)).unwrap();
            let glow = visual.glow.get();
            min = min.min(glow);
            max = max.max(glow);
        }

        // Full sine cycle covered: peaks near 0.4 and 1.0.
        assert!(min >= 0.4 - 1e-3 && min < 0.45);
        assert!(max <= 1.0 + 1e-3 && max > 0.95);
    }
}

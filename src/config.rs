//! Engine configuration.
//!
//! One plain struct, preset constructors in the spirit of theme presets.
//! Configuration is policy the composition root applies when wiring
//! producers - effects themselves never read it.

use std::time::Duration;

/// Tuning knobs for the motion engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionConfig {
    /// Target frame rate for the drive loop.
    pub fps: u16,
    /// Skip continuous cosmetic effects; one-shot transitions land on
    /// their end pose immediately.
    pub reduce_motion: bool,
    /// Scale factor for particle counts (0.0 disables fields entirely).
    pub particle_density: f32,
    /// Suspend all animation while the terminal is unfocused.
    pub pause_on_focus_loss: bool,
}

impl MotionConfig {
    /// Everything on, 60fps.
    pub fn full() -> Self {
        Self {
            fps: 60,
            reduce_motion: false,
            particle_density: 1.0,
            pause_on_focus_loss: true,
        }
    }

    /// Low-power preset: halved particle load, continuous cosmetics off.
    pub fn reduced() -> Self {
        Self {
            fps: 30,
            reduce_motion: true,
            particle_density: 0.5,
            ..Self::full()
        }
    }

    /// Interval between frames at the configured rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.fps.max(1) as f32)
    }

    /// Particle count after applying the density factor.
    pub fn particle_count(&self, base: usize) -> usize {
        (base as f32 * self.particle_density.clamp(0.0, 1.0)).round() as usize
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::full()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval() {
        let config = MotionConfig::full();
        let interval = config.frame_interval();
        assert!(interval >= Duration::from_millis(16));
        assert!(interval <= Duration::from_millis(17));
    }

    #[test]
    fn test_frame_interval_guards_zero_fps() {
        let config = MotionConfig { fps: 0, ..MotionConfig::full() };
        assert_eq!(config.frame_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_particle_count_scaling() {
        assert_eq!(MotionConfig::full().particle_count(50), 50);
        assert_eq!(MotionConfig::reduced().particle_count(50), 25);

        let off = MotionConfig { particle_density: 0.0, ..MotionConfig::full() };
        assert_eq!(off.particle_count(50), 0);
    }
}

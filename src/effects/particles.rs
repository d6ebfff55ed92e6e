//! Drifting particle field.
//!
//! A fixed population of particles drifts across a bounded field and
//! wraps at the edges. The whole population is published through one
//! signal per frame; hosts paint each particle as a dot glyph sized and
//! tinted from its fields.

use std::time::Duration;

use spark_signals::{Signal, signal};

use crate::scheduler::{Tick, TickError, Tickable};
use crate::types::Rgba;

/// Default particle population before density scaling.
pub const DEFAULT_COUNT: usize = 50;

/// Maximum drift speed in cells per second, per axis.
const MAX_VELOCITY: f32 = 4.0;

/// The two accent tints particles are dealt from.
pub const ACCENT_GOLD: Rgba = Rgba::rgb(0xD4, 0xAF, 0x37);
pub const ACCENT_COPPER: Rgba = Rgba::rgb(0xB8, 0x73, 0x33);

/// One drifting particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Dot size hint in cells (1.0..3.0).
    pub size: f32,
    pub color: Rgba,
    pub opacity: f32,
}

/// Deterministic jitter source for spawning.
///
/// A multiplicative congruential step is plenty for decorative scatter
/// and keeps fields reproducible from a seed, which the tests rely on.
struct Jitter(u64);

impl Jitter {
    fn new(seed: u64) -> Self {
        Self(seed | 1)
    }

    /// Next value in [0, 1).
    fn next_f32(&mut self) -> f32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as f32) / ((1u64 << 31) as f32)
    }

    /// Next value in [-1, 1).
    fn next_signed(&mut self) -> f32 {
        self.next_f32() * 2.0 - 1.0
    }
}

/// Continuous particle drift over a `width` x `height` cell field.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    snapshot: Signal<Vec<Particle>>,
}

impl ParticleField {
    /// Spawn `count` particles scattered over the field.
    pub fn new(count: usize, width: u16, height: u16, seed: u64) -> Self {
        let (w, h) = (width as f32, height as f32);
        let mut jitter = Jitter::new(seed);

        let particles = (0..count)
            .map(|_| Particle {
                x: jitter.next_f32() * w,
                y: jitter.next_f32() * h,
                vx: jitter.next_signed() * MAX_VELOCITY,
                vy: jitter.next_signed() * MAX_VELOCITY,
                size: 1.0 + jitter.next_f32() * 2.0,
                color: if jitter.next_f32() > 0.5 { ACCENT_GOLD } else { ACCENT_COPPER },
                opacity: 0.3 + jitter.next_f32() * 0.5,
            })
            .collect::<Vec<_>>();

        let snapshot = signal(particles.clone());
        Self { particles, width: w, height: h, snapshot }
    }

    /// The published population; hosts read this to paint.
    pub fn particles(&self) -> Signal<Vec<Particle>> {
        self.snapshot.clone()
    }

    /// Resize the field (terminal resize). Particles keep their positions
    /// and wrap against the new bounds from the next frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width as f32;
        self.height = height as f32;
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Wrap a coordinate into [0, max).
fn wrap(value: f32, max: f32) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    if value >= max {
        value - max
    } else if value < 0.0 {
        value + max
    } else {
        value
    }
}

impl Tickable for ParticleField {
    fn update(&mut self, dt: Duration) -> Result<Tick, TickError> {
        let secs = dt.as_secs_f32();
        for particle in &mut self.particles {
            particle.x = wrap(particle.x + particle.vx * secs, self.width);
            particle.y = wrap(particle.y + particle.vy * secs, self.height);
        }
        self.snapshot.set(self.particles.clone());
        Ok(Tick::Continue)
    }
}

//! Autoplaying carousel offset.
//!
//! Publishes a continuous offset in slide units; hosts translate their
//! slide strip by `-offset * slide_width` and draw modulo the slide count.

use std::time::Duration;

use spark_signals::{Signal, signal};

use crate::ease::EASE_SMOOTH;
use crate::scheduler::{Tick, TickError, Tickable};

/// Dwell time on each slide.
pub const AUTOPLAY_DELAY: Duration = Duration::from_secs(2);
/// Duration of one slide transition.
pub const SLIDE_DURATION: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Sliding,
}

/// Looping autoplay: dwell, glide one slide forward, repeat.
pub struct Carousel {
    offset: Signal<f32>,
    current: Signal<usize>,
    slides: usize,
    phase: Phase,
    elapsed: Duration,
}

impl Carousel {
    pub fn new(slides: usize) -> Self {
        Self {
            offset: signal(0.0),
            current: signal(0),
            slides,
            phase: Phase::Idle,
            elapsed: Duration::ZERO,
        }
    }

    /// Continuous position in slide units (wraps back to 0.0 after the
    /// last slide completes its glide).
    pub fn offset(&self) -> Signal<f32> {
        self.offset.clone()
    }

    /// Index of the slide currently (or most recently) at rest.
    pub fn current(&self) -> Signal<usize> {
        self.current.clone()
    }
}

impl Tickable for Carousel {
    fn update(&mut self, dt: Duration) -> Result<Tick, TickError> {
        if self.slides < 2 {
            return Ok(Tick::Continue);
        }

        self.elapsed += dt;

        match self.phase {
            Phase::Idle => {
                if self.elapsed >= AUTOPLAY_DELAY {
                    self.elapsed = self.elapsed.saturating_sub(AUTOPLAY_DELAY);
                    self.phase = Phase::Sliding;
                }
            }
            Phase::Sliding => {
                let t = self.elapsed.as_secs_f32() / SLIDE_DURATION.as_secs_f32();
                if t >= 1.0 {
                    let next = (self.current.get() + 1) % self.slides;
                    self.current.set(next);
                    self.offset.set(next as f32);
                    self.elapsed = self.elapsed.saturating_sub(SLIDE_DURATION);
                    self.phase = Phase::Idle;
                } else {
                    let from = self.current.get() as f32;
                    self.offset.set(from + EASE_SMOOTH.apply(t));
                }
            }
        }

        Ok(Tick::Continue)
    }
}

//! Preloader progress and fade-out.
//!
//! Fill -> short hold -> fade, then a completion callback so the host can
//! tear the preloader element down and reveal the page.

use std::time::Duration;

use spark_signals::{Signal, signal};

use crate::scheduler::{Tick, TickError, Tickable};
use crate::visual::Visual;

/// How long the progress line takes to fill.
pub const FILL: Duration = Duration::from_secs(2);
/// Pause between a full bar and the fade starting.
pub const HOLD: Duration = Duration::from_millis(300);
/// Fade-out duration.
pub const FADE: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fill,
    Hold,
    Fade,
}

/// Drives a 0..1 progress signal, then fades the preloader visual away.
pub struct Preloader {
    visual: Visual,
    progress: Signal<f32>,
    phase: Phase,
    elapsed: Duration,
    on_done: Option<Box<dyn FnOnce()>>,
}

impl Preloader {
    pub fn new(visual: Visual) -> Self {
        Self {
            visual,
            progress: signal(0.0),
            phase: Phase::Fill,
            elapsed: Duration::ZERO,
            on_done: None,
        }
    }

    /// Invoke `f` once, when the fade completes.
    pub fn on_done(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_done = Some(Box::new(f));
        self
    }

    /// The fill progress, 0..1. Hosts bind the loading line's width to it.
    pub fn progress(&self) -> Signal<f32> {
        self.progress.clone()
    }

    /// Move to the next phase, carrying overshoot so total duration stays
    /// accurate across uneven frames.
    fn advance(&mut self, phase: Phase, spent: Duration) {
        self.phase = phase;
        self.elapsed = self.elapsed.saturating_sub(spent);
    }
}

impl Tickable for Preloader {
    fn update(&mut self, dt: Duration) -> Result<Tick, TickError> {
        self.elapsed += dt;

        match self.phase {
            Phase::Fill => {
                let t = (self.elapsed.as_secs_f32() / FILL.as_secs_f32()).min(1.0);
                self.progress.set(t);
                if self.elapsed >= FILL {
                    self.advance(Phase::Hold, FILL);
                }
                Ok(Tick::Continue)
            }
            Phase::Hold => {
                if self.elapsed >= HOLD {
                    self.advance(Phase::Fade, HOLD);
                }
                Ok(Tick::Continue)
            }
            Phase::Fade => {
                let t = (self.elapsed.as_secs_f32() / FADE.as_secs_f32()).min(1.0);
                self.visual.opacity.set(1.0 - t);
                if self.elapsed >= FADE {
                    if let Some(done) = self.on_done.take() {
                        done();
                    }
                    return Ok(Tick::Done);
                }
                Ok(Tick::Continue)
            }
        }
    }
}

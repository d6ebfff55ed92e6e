//! One-shot entrance transitions.
//!
//! A `Reveal` snaps its element to an off-stage pose the moment it is
//! created, then glides it to rest when ticked. Viewport producers create
//! one per element as it scrolls into view; a start delay gives grouped
//! elements the staggered cascade.

use std::time::Duration;

use crate::ease::{EASE_SMOOTH, EASE_SPRING, Easing, lerp};
use crate::scheduler::{Tick, TickError, Tickable};
use crate::visual::Visual;

/// Transition duration.
pub const DURATION: Duration = Duration::from_millis(800);

/// Delay step between staggered siblings.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Rows an element rises when fading in upward.
const RISE_ROWS: f32 = 4.0;
/// Columns an element slides in from either side.
const SLIDE_COLS: f32 = 12.0;

/// Entrance styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    FadeInUp,
    SlideInLeft,
    SlideInRight,
    ScaleIn,
    RotateIn,
}

/// Starting pose for a reveal kind: (offset_x, offset_y, scale, rotation).
fn start_pose(kind: RevealKind) -> (f32, f32, f32, f32) {
    match kind {
        RevealKind::FadeInUp => (0.0, RISE_ROWS, 1.0, 0.0),
        RevealKind::SlideInLeft => (-SLIDE_COLS, 0.0, 1.0, 0.0),
        RevealKind::SlideInRight => (SLIDE_COLS, 0.0, 1.0, 0.0),
        RevealKind::ScaleIn => (0.0, 0.0, 0.8, 0.0),
        RevealKind::RotateIn => (0.0, 0.0, 0.9, -10.0),
    }
}

fn curve(kind: RevealKind) -> Easing {
    match kind {
        RevealKind::ScaleIn | RevealKind::RotateIn => EASE_SPRING,
        _ => EASE_SMOOTH,
    }
}

/// One-shot transition from an off-stage pose to rest.
pub struct Reveal {
    visual: Visual,
    kind: RevealKind,
    delay: Duration,
    elapsed: Duration,
}

impl Reveal {
    /// Create the reveal and apply its starting pose immediately, so the
    /// element is already hidden/offset when this frame paints.
    pub fn new(visual: Visual, kind: RevealKind) -> Self {
        let (x, y, scale, rotation) = start_pose(kind);
        visual.opacity.set(0.0);
        visual.offset_x.set(x);
        visual.offset_y.set(y);
        visual.scale.set(scale);
        visual.rotation.set(rotation);

        Self { visual, kind, delay: Duration::ZERO, elapsed: Duration::ZERO }
    }

    /// Hold the starting pose for `delay` before animating. Staggered
    /// groups pass `STAGGER_STEP * index`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Tickable for Reveal {
    fn update(&mut self, dt: Duration) -> Result<Tick, TickError> {
        self.elapsed += dt;

        let Some(active) = self.elapsed.checked_sub(self.delay) else {
            return Ok(Tick::Continue);
        };

        let t = active.as_secs_f32() / DURATION.as_secs_f32();
        if t >= 1.0 {
            self.visual.opacity.set(1.0);
            self.visual.reset_pose();
            return Ok(Tick::Done);
        }

        let eased = curve(self.kind).apply(t);
        let (x, y, scale, rotation) = start_pose(self.kind);

        // Spring curves overshoot 1.0; opacity must not.
        self.visual.opacity.set(eased.clamp(0.0, 1.0));
        self.visual.offset_x.set(lerp(x, 0.0, eased));
        self.visual.offset_y.set(lerp(y, 0.0, eased));
        self.visual.scale.set(lerp(scale, 1.0, eased));
        self.visual.rotation.set(lerp(rotation, 0.0, eased));

        Ok(Tick::Continue)
    }
}

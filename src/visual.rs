//! The reactive style surface effects write to.
//!
//! A [`Visual`] is a bundle of cloneable signals describing how one element
//! should currently be presented: where it sits relative to its laid-out
//! position, how opaque it is, its colors, glow, corner rounding and text.
//! Effects mutate these once per frame; hosts paint by reading them,
//! typically from inside a `spark_signals::effect` so repaints follow
//! writes automatically.
//!
//! Cloning a `Visual` clones the signal handles, not the state - producers
//! hand clones to effects and keep one for the painter.

use spark_signals::{Signal, signal};

use crate::types::{CornerRadii, Rgba};

/// Three-stop background gradient (start, middle, end).
///
/// Hosts blend horizontally between the stops; the gradient-shift effect
/// rotates their hues.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GradientStops(pub [Rgba; 3]);

/// Reactive presentational state for one element.
#[derive(Clone)]
pub struct Visual {
    /// Horizontal offset from the element's resting position, in cells.
    pub offset_x: Signal<f32>,
    /// Vertical offset from the element's resting position, in cells.
    pub offset_y: Signal<f32>,
    /// Uniform scale factor (1.0 = natural size).
    pub scale: Signal<f32>,
    /// Z-rotation in degrees (entrance spins).
    pub rotation: Signal<f32>,
    /// Perspective tilt around the x axis, degrees.
    pub tilt_x: Signal<f32>,
    /// Perspective tilt around the y axis, degrees.
    pub tilt_y: Signal<f32>,
    /// Opacity 0..1.
    pub opacity: Signal<f32>,
    /// Foreground color.
    pub fg: Signal<Rgba>,
    /// Background color.
    pub bg: Signal<Rgba>,
    /// Glow intensity 0..1; hosts usually render it as fg brightness.
    pub glow: Signal<f32>,
    /// Corner rounding.
    pub radii: Signal<CornerRadii>,
    /// Background gradient, when a gradient effect drives this element.
    pub gradient: Signal<GradientStops>,
    /// Display text (typewriter, counters).
    pub text: Signal<String>,
    /// Caret column in display cells while text is being revealed.
    pub caret: Signal<Option<u16>>,
}

impl Visual {
    /// A visual at rest: no offset, full opacity, white on transparent.
    pub fn new() -> Self {
        Self {
            offset_x: signal(0.0),
            offset_y: signal(0.0),
            scale: signal(1.0),
            rotation: signal(0.0),
            tilt_x: signal(0.0),
            tilt_y: signal(0.0),
            opacity: signal(1.0),
            fg: signal(Rgba::WHITE),
            bg: signal(Rgba::TRANSPARENT),
            glow: signal(0.0),
            radii: signal(CornerRadii::default()),
            gradient: signal(GradientStops::default()),
            text: signal(String::new()),
            caret: signal(None),
        }
    }

    /// Reset the pose channels (offset, scale, rotation, tilt) to rest.
    ///
    /// Hover effects call this on leave so an element settles back exactly
    /// where layout put it.
    pub fn reset_pose(&self) {
        self.offset_x.set(0.0);
        self.offset_y.set(0.0);
        self.scale.set(1.0);
        self.rotation.set(0.0);
        self.tilt_x.set(0.0);
        self.tilt_y.set(0.0);
    }
}

impl Default for Visual {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

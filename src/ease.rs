//! Easing curves and interpolation helpers.
//!
//! Every timed effect maps elapsed time to a 0..1 progress, feeds it through
//! an [`Easing`], then interpolates its target property. Curves are applied
//! as `easing.apply(t)`.

use std::time::Duration;

/// Reference frame rate for per-frame smoothing factors.
///
/// Chase-style effects were tuned as "fraction per frame at 60fps";
/// [`smooth_factor`] rescales that tuning to the actual frame delta.
pub const REFERENCE_FPS: f32 = 60.0;

/// Linear interpolation.
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + t * (end - start)
}

/// Frame-rate independent exponential smoothing factor.
///
/// `k` is the per-frame catch-up fraction at [`REFERENCE_FPS`]. The returned
/// factor converges to the same trajectory regardless of the actual `dt`,
/// so a chase looks identical at 30fps and 120fps.
#[inline]
pub fn smooth_factor(k: f32, dt: Duration) -> f32 {
    let k = k.clamp(0.0, 1.0);
    1.0 - (1.0 - k).powf(dt.as_secs_f32() * REFERENCE_FPS)
}

// =============================================================================
// Easing
// =============================================================================

/// A timing curve mapping progress 0..1 to eased progress.
///
/// `CubicBezier` matches CSS timing-function semantics: the control points
/// define x = time, y = progress, and the curve is solved for y at a given x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Even speed.
    Linear,
    /// Fast start, decelerating to the end.
    OutCubic,
    /// Decelerating with a slight overshoot past 1.0 before settling.
    OutBack,
    /// Slow-fast-slow.
    InOutQuad,
    /// Arbitrary cubic Bézier timing curve (x1, y1, x2, y2).
    CubicBezier(f32, f32, f32, f32),
}

/// The page-transition curve: gentle ease-out used by reveals and slides.
pub const EASE_SMOOTH: Easing = Easing::CubicBezier(0.25, 0.46, 0.45, 0.94);

/// Springy overshoot curve used by scale/rotate entrances.
pub const EASE_SPRING: Easing = Easing::CubicBezier(0.34, 1.56, 0.64, 1.0);

impl Easing {
    /// Apply the curve to a progress value.
    ///
    /// Input is clamped to 0..1; output may overshoot that range for
    /// back/spring curves.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::OutBack => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
            }
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

// =============================================================================
// Cubic Bézier solver
// =============================================================================

/// Evaluate a 1D cubic Bézier with endpoints 0 and 1 and control values
/// `c1`, `c2` at parameter `u`.
#[inline]
fn bezier_axis(c1: f32, c2: f32, u: f32) -> f32 {
    // Horner form of B(u) = 3(1-u)^2 u c1 + 3(1-u) u^2 c2 + u^3
    let a = 1.0 + 3.0 * c1 - 3.0 * c2;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    ((a * u + b) * u + c) * u
}

#[inline]
fn bezier_axis_derivative(c1: f32, c2: f32, u: f32) -> f32 {
    let a = 1.0 + 3.0 * c1 - 3.0 * c2;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    (3.0 * a * u + 2.0 * b) * u + c
}

/// Solve the curve parameter for `x`, then sample y - how CSS timing
/// functions evaluate. Newton iterations with a bisection fallback keep
/// this robust for flat control configurations.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut u = x;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, u) - x;
        if err.abs() < 1e-5 {
            return bezier_axis(y1, y2, u);
        }
        let slope = bezier_axis_derivative(x1, x2, u);
        if slope.abs() < 1e-6 {
            break;
        }
        u = (u - err / slope).clamp(0.0, 1.0);
    }

    // Newton stalled; bisect.
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    for _ in 0..32 {
        u = (lo + hi) / 2.0;
        if bezier_axis(x1, x2, u) < x {
            lo = u;
        } else {
            hi = u;
        }
    }
    bezier_axis(y1, y2, u)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(10.0, 0.0, 0.25), 7.5);
    }

    #[test]
    fn test_easing_endpoints() {
        let curves = [
            Easing::Linear,
            Easing::OutCubic,
            Easing::OutBack,
            Easing::InOutQuad,
            EASE_SMOOTH,
            EASE_SPRING,
        ];
        for curve in curves {
            assert!(approx(curve.apply(0.0), 0.0), "{curve:?} at 0");
            assert!(approx(curve.apply(1.0), 1.0), "{curve:?} at 1");
        }
    }

    #[test]
    fn test_out_cubic_decelerates() {
        // Past the halfway point in less than half the time.
        assert!(Easing::OutCubic.apply(0.3) > 0.5);
    }

    #[test]
    fn test_out_back_overshoots() {
        let peak = (0..100)
            .map(|i| Easing::OutBack.apply(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_cubic_bezier_is_monotonic_for_smooth_curve() {
        let mut prev = 0.0;
        for i in 0..=50 {
            let v = EASE_SMOOTH.apply(i as f32 / 50.0);
            assert!(v >= prev - 1e-4);
            prev = v;
        }
    }

    #[test]
    fn test_cubic_bezier_linear_controls() {
        // Control points on the diagonal reduce to identity.
        let linear = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!(approx(linear.apply(t), t), "at {t}");
        }
    }

    #[test]
    fn test_smooth_factor_reference_rate() {
        // At exactly one reference frame the factor equals k.
        let dt = Duration::from_secs_f32(1.0 / REFERENCE_FPS);
        assert!(approx(smooth_factor(0.15, dt), 0.15));
    }

    #[test]
    fn test_smooth_factor_composes_across_rates() {
        // Two half-frames must catch up the same amount as one full frame.
        let full = smooth_factor(0.8, Duration::from_secs_f32(1.0 / 60.0));
        let half = smooth_factor(0.8, Duration::from_secs_f32(1.0 / 120.0));
        let composed = 1.0 - (1.0 - half) * (1.0 - half);
        assert!(approx(full, composed));
    }
}

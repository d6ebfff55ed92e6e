//! Scroll-derived page chrome.
//!
//! The page scroll offset is a signal; everything hanging off it
//! (condensed nav bar, back-to-top affordance, parallax layers) is either
//! a derived or a pure mapping. No handler stores any of this state.

use spark_signals::{Derived, Signal, derived, signal};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Rows of scroll after which the nav bar condenses.
pub const NAV_CONDENSE_AFTER: f32 = 6.0;

/// Rows of scroll after which the back-to-top affordance shows.
pub const BACK_TO_TOP_AFTER: f32 = 30.0;

/// Rows scrolled per wheel notch.
pub const WHEEL_SCROLL: f32 = 3.0;

// =============================================================================
// PAGE MOTION
// =============================================================================

/// Page scroll state and the chrome derived from it.
pub struct PageMotion {
    scroll_y: Signal<f32>,
    max_scroll: Signal<f32>,
}

impl PageMotion {
    /// `max_scroll` is the page height minus the viewport, in rows.
    pub fn new(max_scroll: f32) -> Self {
        Self {
            scroll_y: signal(0.0f32),
            max_scroll: signal(max_scroll.max(0.0)),
        }
    }

    /// The scroll offset signal. Scroll tweens animate this directly.
    pub fn scroll_y(&self) -> Signal<f32> {
        self.scroll_y.clone()
    }

    /// Scroll by a number of rows, clamped to the page bounds.
    pub fn scroll_by(&self, delta: f32) {
        let next = (self.scroll_y.get() + delta).clamp(0.0, self.max_scroll.get());
        self.scroll_y.set(next);
    }

    /// Update the scrollable extent after a resize or content change.
    pub fn set_max_scroll(&self, max: f32) {
        self.max_scroll.set(max.max(0.0));
        // Re-clamp in case the page got shorter.
        self.scroll_by(0.0);
    }

    /// Derived flag: should the nav bar render condensed?
    pub fn nav_condensed(&self) -> Derived<bool, impl Fn() -> bool> {
        let scroll = self.scroll_y.clone();
        derived(move || scroll.get() > NAV_CONDENSE_AFTER)
    }

    /// Derived flag: should the back-to-top affordance show?
    pub fn back_to_top_visible(&self) -> Derived<bool, impl Fn() -> bool> {
        let scroll = self.scroll_y.clone();
        derived(move || scroll.get() > BACK_TO_TOP_AFTER)
    }
}

/// Parallax offset for a layer: slower-than-scroll counter-movement.
///
/// `speed` 0.0 pins the layer to the viewport, 1.0 pins it to the page.
pub fn parallax_offset(scroll_y: f32, speed: f32) -> f32 {
    -(scroll_y * speed)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_clamps_to_bounds() {
        let page = PageMotion::new(100.0);

        page.scroll_by(-10.0);
        assert_eq!(page.scroll_y().get(), 0.0);

        page.scroll_by(250.0);
        assert_eq!(page.scroll_y().get(), 100.0);
    }

    #[test]
    fn test_nav_condenses_past_threshold() {
        let page = PageMotion::new(100.0);
        let condensed = page.nav_condensed();
        assert!(!condensed.get());

        page.scroll_by(NAV_CONDENSE_AFTER + 1.0);
        assert!(condensed.get());

        page.scroll_by(-100.0);
        assert!(!condensed.get());
    }

    #[test]
    fn test_back_to_top_threshold() {
        let page = PageMotion::new(100.0);
        let visible = page.back_to_top_visible();

        page.scroll_by(BACK_TO_TOP_AFTER);
        assert!(!visible.get());

        page.scroll_by(1.0);
        assert!(visible.get());
    }

    #[test]
    fn test_shrinking_page_reclamps() {
        let page = PageMotion::new(100.0);
        page.scroll_by(80.0);

        page.set_max_scroll(50.0);
        assert_eq!(page.scroll_y().get(), 50.0);
    }

    #[test]
    fn test_parallax_offset() {
        assert_eq!(parallax_offset(10.0, 0.5), -5.0);
        assert_eq!(parallax_offset(10.0, 0.0), 0.0);
        assert_eq!(parallax_offset(10.0, 1.0), -10.0);
    }
}

//! Composition root - the drive loop and the suspend policy.
//!
//! `MotionLoop` owns the scheduler, the pointer state, and the page scroll
//! signal, and is the only place the real clock enters the engine. Each
//! tick polls the terminal for one event (the poll timeout doubles as
//! frame pacing) and then advances the scheduler.
//!
//! Suspension is a bitmask of independent reasons: while any reason is
//! asserted the scheduler is stopped, so one focus loss or low-power
//! signal parks every animation at once; clearing the last reason
//! restarts them.
//!
//! # Example
//!
//! ```ignore
//! use spark_motion::runtime::MotionLoop;
//! use spark_motion::config::MotionConfig;
//!
//! let mut motion = MotionLoop::new(MotionConfig::full());
//! // ... register effects, watch pointer regions ...
//! motion.enter()?;
//! motion.run()?;
//! motion.exit()?;
//! ```

use std::time::Instant;

use crate::config::MotionConfig;
use crate::error::MotionError;
use crate::input::{self, InputEvent};
use crate::interact::page::{PageMotion, WHEEL_SCROLL};
use crate::interact::pointer::{Pointer, PointerAction};
use crate::scheduler::Scheduler;

bitflags::bitflags! {
    /// Reasons animation is currently suspended.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Suspend: u8 {
        /// Terminal lost focus.
        const FOCUS_LOST = 1 << 0;
        /// Host signalled a low-power condition.
        const LOW_POWER = 1 << 1;
        /// Application asked for a pause.
        const APP = 1 << 2;
    }
}

/// The engine's drive loop.
pub struct MotionLoop {
    config: MotionConfig,
    scheduler: Scheduler,
    pointer: Pointer,
    page: PageMotion,
    suspended: Suspend,
    running: bool,
    captured: bool,
}

impl MotionLoop {
    /// Build a loop with an empty scheduler, already in the running state.
    pub fn new(config: MotionConfig) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler.start();
        Self {
            config,
            scheduler,
            pointer: Pointer::new(),
            page: PageMotion::new(0.0),
            suspended: Suspend::empty(),
            running: true,
            captured: false,
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// The scheduler, for registering and removing effects.
    pub fn scheduler(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    /// Pointer state, for watching hover/click regions.
    pub fn pointer(&mut self) -> &mut Pointer {
        &mut self.pointer
    }

    /// Page scroll state and derived chrome.
    pub fn page(&self) -> &PageMotion {
        &self.page
    }

    /// Replace the page scroll model (set after measuring content).
    pub fn set_page(&mut self, page: PageMotion) {
        self.page = page;
    }

    // =========================================================================
    // Suspend policy
    // =========================================================================

    /// Assert a suspend reason. The first asserted reason stops the
    /// scheduler; further ones just accumulate.
    pub fn suspend(&mut self, reason: Suspend) {
        self.suspended.insert(reason);
        self.apply_suspend_state();
    }

    /// Clear a suspend reason. Animation resumes only when the mask is
    /// empty again.
    pub fn resume(&mut self, reason: Suspend) {
        self.suspended.remove(reason);
        self.apply_suspend_state();
    }

    /// Currently asserted suspend reasons.
    pub fn suspended(&self) -> Suspend {
        self.suspended
    }

    fn apply_suspend_state(&mut self) {
        if self.suspended.is_empty() {
            self.scheduler.start();
        } else {
            self.scheduler.stop();
        }
    }

    // =========================================================================
    // Terminal session
    // =========================================================================

    /// Enable mouse capture and focus reporting.
    pub fn enter(&mut self) -> Result<(), MotionError> {
        input::enable_capture()?;
        self.captured = true;
        Ok(())
    }

    /// Disable capture again.
    pub fn exit(&mut self) -> Result<(), MotionError> {
        if self.captured {
            input::disable_capture()?;
            self.captured = false;
        }
        Ok(())
    }

    // =========================================================================
    // Drive loop
    // =========================================================================

    /// Process at most one input event, then advance one frame.
    ///
    /// Returns `Ok(false)` once the loop has been stopped (Ctrl+C or
    /// [`MotionLoop::stop`]).
    pub fn tick(&mut self) -> Result<bool, MotionError> {
        if !self.running {
            return Ok(false);
        }

        if let Some(event) = input::poll_event(self.config.frame_interval())? {
            self.route(event);
        }

        self.scheduler.frame(Instant::now());
        Ok(self.running)
    }

    /// Drive until stopped.
    pub fn run(&mut self) -> Result<(), MotionError> {
        while self.tick()? {}
        Ok(())
    }

    /// Request a graceful stop.
    pub fn stop(&mut self) {
        self.running = false;
    }

    fn route(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pointer(pointer_event) => {
                if pointer_event.action == PointerAction::Scroll {
                    self.page
                        .scroll_by(pointer_event.scroll_delta as f32 * WHEEL_SCROLL);
                }
                self.pointer.dispatch(&pointer_event);
            }
            InputEvent::Key(key) => {
                if key.ctrl && key.ch == Some('c') {
                    self.running = false;
                }
            }
            InputEvent::Focus(gained) => {
                if self.config.pause_on_focus_loss {
                    if gained {
                        self.resume(Suspend::FOCUS_LOST);
                    } else {
                        self.suspend(Suspend::FOCUS_LOST);
                    }
                }
            }
            InputEvent::Resize(_, _) | InputEvent::None => {}
        }
    }
}

impl Drop for MotionLoop {
    fn drop(&mut self) {
        // Best effort; the terminal may already be gone.
        if self.captured {
            let _ = input::disable_capture();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyPress;
    use crate::interact::pointer::PointerEvent;

    #[test]
    fn test_suspend_mask_gates_scheduler() {
        let mut motion = MotionLoop::new(MotionConfig::full());
        assert!(motion.scheduler.is_running());

        motion.suspend(Suspend::FOCUS_LOST);
        assert!(!motion.scheduler.is_running());

        // A second reason keeps it stopped...
        motion.suspend(Suspend::LOW_POWER);
        motion.resume(Suspend::FOCUS_LOST);
        assert!(!motion.scheduler.is_running());

        // ...until the mask empties.
        motion.resume(Suspend::LOW_POWER);
        assert!(motion.scheduler.is_running());
    }

    #[test]
    fn test_focus_events_drive_suspension() {
        let mut motion = MotionLoop::new(MotionConfig::full());

        motion.route(InputEvent::Focus(false));
        assert_eq!(motion.suspended(), Suspend::FOCUS_LOST);
        assert!(!motion.scheduler.is_running());

        motion.route(InputEvent::Focus(true));
        assert!(motion.suspended().is_empty());
        assert!(motion.scheduler.is_running());
    }

    #[test]
    fn test_focus_ignored_when_policy_disabled() {
        let config = MotionConfig { pause_on_focus_loss: false, ..MotionConfig::full() };
        let mut motion = MotionLoop::new(config);

        motion.route(InputEvent::Focus(false));
        assert!(motion.suspended().is_empty());
        assert!(motion.scheduler.is_running());
    }

    #[test]
    fn test_ctrl_c_stops_loop() {
        let mut motion = MotionLoop::new(MotionConfig::full());
        motion.route(InputEvent::Key(KeyPress { ch: Some('c'), ctrl: true, esc: false }));
        assert!(!motion.running);

        // Plain 'c' must not.
        let mut motion = MotionLoop::new(MotionConfig::full());
        motion.route(InputEvent::Key(KeyPress { ch: Some('c'), ctrl: false, esc: false }));
        assert!(motion.running);
    }

    #[test]
    fn test_wheel_scrolls_page() {
        let mut motion = MotionLoop::new(MotionConfig::full());
        motion.set_page(PageMotion::new(100.0));

        motion.route(InputEvent::Pointer(PointerEvent::scroll(0, 0, 1)));
        assert_eq!(motion.page().scroll_y().get(), WHEEL_SCROLL);

        motion.route(InputEvent::Pointer(PointerEvent::scroll(0, 0, -1)));
        assert_eq!(motion.page().scroll_y().get(), 0.0);
    }
}

//! Frame scheduler - one clock, many tickables.
//!
//! Every continuous effect in the crate is a [`Tickable`] registered here
//! under a string key. The host drives exactly one frame callback
//! ([`Scheduler::frame`]) per display refresh; the scheduler fans it out to
//! all registered entries. Producers never own a loop of their own - they
//! register, the effect advances by the elapsed time it is handed, and it
//! retires itself by returning [`Tick::Done`].
//!
//! The scheduler is an explicit instance owned by the composition root
//! (see `runtime`), not a module global, and it never reads the clock:
//! time only enters through `frame(now)`. Tests drive it with synthetic
//! instants.
//!
//! # Example
//!
//! ```ignore
//! use spark_motion::scheduler::{Scheduler, Tick};
//! use std::time::Instant;
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.register_fn("pulse", |dt| {
//!     // advance some visual state by dt
//!     Ok(Tick::Continue)
//! });
//! scheduler.start();
//! scheduler.frame(Instant::now());
//! ```

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::error::MotionError;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Upper bound applied to the per-frame delta.
///
/// After a host stall (suspended terminal, long blocking call) the next
/// frame would otherwise hand effects seconds of elapsed time and snap
/// every animation to its end pose.
pub const MAX_FRAME_DT: Duration = Duration::from_millis(50);

// =============================================================================
// TICKABLE
// =============================================================================

/// Error type a tickable may report from its update.
pub type TickError = Box<dyn std::error::Error>;

/// What a tickable wants the scheduler to do with it after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Keep the entry registered.
    Continue,
    /// Retire the entry after this sweep; it will not be ticked again.
    Done,
}

/// A unit of continuous, time-based visual mutation.
///
/// `update` is invoked once per scheduler frame with the elapsed time since
/// the previous frame (zero on the first frame after `start`). Tickables
/// close over whatever signals or state they animate; the scheduler knows
/// nothing about what an update does.
pub trait Tickable {
    fn update(&mut self, dt: Duration) -> Result<Tick, TickError>;
}

/// Closure adapter so hosts and tests can register plain functions.
struct FnTickable<F>(F);

impl<F> Tickable for FnTickable<F>
where
    F: FnMut(Duration) -> Result<Tick, TickError>,
{
    fn update(&mut self, dt: Duration) -> Result<Tick, TickError> {
        (self.0)(dt)
    }
}

// =============================================================================
// FAULT POLICY
// =============================================================================

/// What happens to a tickable whose update returns an error.
///
/// Either way the fault is reported and the rest of the sweep runs; a
/// fault in one effect never halts animation as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultPolicy {
    /// Retire the faulting entry so it cannot fail every subsequent frame.
    #[default]
    Retire,
    /// Keep the entry registered and keep ticking it.
    Skip,
}

/// Observability hook invoked with every tickable fault.
pub type FaultHook = Box<dyn FnMut(&MotionError)>;

// =============================================================================
// SCHEDULER
// =============================================================================

/// Registry of named tickables driven by a single frame callback.
///
/// Two states: stopped (initial) and running. `start`/`stop` are the only
/// transitions and both are idempotent. While stopped, `frame` is a no-op
/// and no tickable is updated.
pub struct Scheduler {
    entries: HashMap<String, Box<dyn Tickable>>,
    running: bool,
    last_frame: Option<Instant>,
    policy: FaultPolicy,
    fault_hook: Option<FaultHook>,
}

impl Scheduler {
    /// Create a stopped scheduler with the default fault policy.
    pub fn new() -> Self {
        Self::with_policy(FaultPolicy::default())
    }

    /// Create a stopped scheduler with an explicit fault policy.
    pub fn with_policy(policy: FaultPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            running: false,
            last_frame: None,
            policy,
            fault_hook: None,
        }
    }

    /// Install an observability hook for tickable faults.
    ///
    /// Faults are always logged; the hook is for hosts that want to route
    /// them elsewhere (metrics, an on-screen debug panel).
    pub fn set_fault_hook(&mut self, hook: impl FnMut(&MotionError) + 'static) {
        self.fault_hook = Some(Box::new(hook));
    }

    // =========================================================================
    // Registry
    // =========================================================================

    /// Insert or replace the tickable under `key`.
    ///
    /// Replacing silently discards the previous entry - it receives no
    /// further updates and no completion signal.
    pub fn register(&mut self, key: impl Into<String>, tickable: Box<dyn Tickable>) {
        self.entries.insert(key.into(), tickable);
    }

    /// Register a closure as a tickable.
    pub fn register_fn<F>(&mut self, key: impl Into<String>, update: F)
    where
        F: FnMut(Duration) -> Result<Tick, TickError> + 'static,
    {
        self.register(key, Box::new(FnTickable(update)));
    }

    /// Remove the entry under `key`. No-op when absent.
    pub fn unregister(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Whether an entry is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of registered tickables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // =========================================================================
    // Run state
    // =========================================================================

    /// Enter the running state. No effect when already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        // Fresh timebase: wall time spent stopped must not reach effects.
        self.last_frame = None;
    }

    /// Leave the running state. No effect when already stopped.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_frame = None;
    }

    /// Read-only run flag.
    pub fn is_running(&self) -> bool {
        self.running
    }

    // =========================================================================
    // Frame callback
    // =========================================================================

    /// Advance every registered tickable once.
    ///
    /// No-op while stopped. The delta handed to tickables is the time since
    /// the previous frame, clamped to [`MAX_FRAME_DT`]; the first frame
    /// after `start` sees a zero delta.
    ///
    /// Completions and faults observed during the sweep are applied to the
    /// registry after iteration, so membership changes become visible on
    /// the next frame, never mid-sweep.
    pub fn frame(&mut self, now: Instant) {
        if !self.running {
            return;
        }

        let dt = self
            .last_frame
            .map(|prev| now.saturating_duration_since(prev).min(MAX_FRAME_DT))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);

        let mut retired: Vec<String> = Vec::new();
        for (key, tickable) in self.entries.iter_mut() {
            match tickable.update(dt) {
                Ok(Tick::Continue) => {}
                Ok(Tick::Done) => retired.push(key.clone()),
                Err(err) => {
                    let fault = MotionError::Fault {
                        key: key.clone(),
                        message: err.to_string(),
                    };
                    log::warn!("{fault}");
                    if let Some(hook) = self.fault_hook.as_mut() {
                        hook(&fault);
                    }
                    if self.policy == FaultPolicy::Retire {
                        retired.push(key.clone());
                    }
                }
            }
        }

        for key in retired {
            self.entries.remove(&key);
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Tickable that counts its updates.
    struct Counter(Rc<Cell<u32>>);

    impl Tickable for Counter {
        fn update(&mut self, _dt: Duration) -> Result<Tick, TickError> {
            self.0.set(self.0.get() + 1);
            Ok(Tick::Continue)
        }
    }

    fn counted() -> (Rc<Cell<u32>>, Box<dyn Tickable>) {
        let count = Rc::new(Cell::new(0));
        (count.clone(), Box::new(Counter(count)))
    }

    fn frames(scheduler: &mut Scheduler, start: Instant, n: u32) -> Instant {
        let step = Duration::from_millis(16);
        let mut now = start;
        for _ in 0..n {
            now += step;
            scheduler.frame(now);
        }
        now
    }

    #[test]
    fn test_registry_net_effect() {
        let mut scheduler = Scheduler::new();
        let (_, a) = counted();
        let (_, b) = counted();
        let (_, b2) = counted();

        scheduler.register("a", a);
        scheduler.register("b", b);
        scheduler.register("b", b2); // overwrite
        scheduler.unregister("a");
        scheduler.unregister("missing"); // no-op

        assert_eq!(scheduler.len(), 1);
        assert!(scheduler.contains("b"));
        assert!(!scheduler.contains("a"));
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut scheduler = Scheduler::new();
        let (count, tickable) = counted();
        scheduler.register("x", tickable);

        scheduler.start();
        scheduler.start();
        assert!(scheduler.is_running());

        // One frame advance: exactly one update, not two.
        scheduler.frame(Instant::now());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut scheduler = Scheduler::new();
        scheduler.start();
        scheduler.stop();
        scheduler.stop();
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_no_updates_while_stopped() {
        let mut scheduler = Scheduler::new();
        let (count, tickable) = counted();
        scheduler.register("x", tickable);

        scheduler.frame(Instant::now());
        assert_eq!(count.get(), 0);

        scheduler.start();
        scheduler.stop();
        scheduler.frame(Instant::now());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_overwrite_replaces_fully() {
        let mut scheduler = Scheduler::new();
        let (old_count, old) = counted();
        let (new_count, new) = counted();

        scheduler.register("fx", old);
        scheduler.start();
        let now = frames(&mut scheduler, Instant::now(), 1);
        assert_eq!(old_count.get(), 1);

        scheduler.register("fx", new);
        frames(&mut scheduler, now, 2);

        // Old tickable never updated again after the overwrite.
        assert_eq!(old_count.get(), 1);
        assert_eq!(new_count.get(), 2);
    }

    #[test]
    fn test_end_to_end_counting() {
        let mut scheduler = Scheduler::new();
        let (a_count, a) = counted();
        let (b_count, b) = counted();

        scheduler.register("a", a);
        scheduler.register("b", b);
        scheduler.start();

        let now = frames(&mut scheduler, Instant::now(), 3);
        assert_eq!(a_count.get(), 3);
        assert_eq!(b_count.get(), 3);

        scheduler.unregister("a");
        let now = frames(&mut scheduler, now, 2);
        assert_eq!(a_count.get(), 3);
        assert_eq!(b_count.get(), 5);

        scheduler.stop();
        frames(&mut scheduler, now, 2);
        assert_eq!(a_count.get(), 3);
        assert_eq!(b_count.get(), 5);
    }

    #[test]
    fn test_done_retires_next_frame() {
        let mut scheduler = Scheduler::new();
        let count = Rc::new(Cell::new(0u32));
        let c = count.clone();
        scheduler.register_fn("oneshot", move |_dt| {
            c.set(c.get() + 1);
            Ok(Tick::Done)
        });
        scheduler.start();

        frames(&mut scheduler, Instant::now(), 3);
        assert_eq!(count.get(), 1);
        assert!(!scheduler.contains("oneshot"));
    }

    #[test]
    fn test_fault_does_not_abort_sweep() {
        let mut scheduler = Scheduler::new();
        let (good_count, good) = counted();
        scheduler.register_fn("bad", |_dt| Err("boom".into()));
        scheduler.register("good", good);

        let faults = Rc::new(Cell::new(0u32));
        let f = faults.clone();
        scheduler.set_fault_hook(move |err| {
            assert!(matches!(err, MotionError::Fault { .. }));
            f.set(f.get() + 1);
        });

        scheduler.start();
        frames(&mut scheduler, Instant::now(), 3);

        // Default policy retires the faulting entry after its first failure.
        assert_eq!(faults.get(), 1);
        assert!(!scheduler.contains("bad"));
        assert_eq!(good_count.get(), 3);
    }

    #[test]
    fn test_fault_policy_skip_keeps_entry() {
        let mut scheduler = Scheduler::with_policy(FaultPolicy::Skip);
        scheduler.register_fn("bad", |_dt| Err("boom".into()));

        let faults = Rc::new(Cell::new(0u32));
        let f = faults.clone();
        scheduler.set_fault_hook(move |_| f.set(f.get() + 1));

        scheduler.start();
        frames(&mut scheduler, Instant::now(), 3);

        assert_eq!(faults.get(), 3);
        assert!(scheduler.contains("bad"));
    }

    #[test]
    fn test_dt_is_clamped_and_restarts_fresh() {
        let mut scheduler = Scheduler::new();
        let seen = Rc::new(Cell::new(Duration::ZERO));
        let s = seen.clone();
        scheduler.register_fn("probe", move |dt| {
            s.set(dt);
            Ok(Tick::Continue)
        });

        let t0 = Instant::now();
        scheduler.start();
        scheduler.frame(t0);
        assert_eq!(seen.get(), Duration::ZERO);

        // A 5s stall is clamped.
        scheduler.frame(t0 + Duration::from_secs(5));
        assert_eq!(seen.get(), MAX_FRAME_DT);

        // Stop/start resets the timebase: next frame is zero again.
        scheduler.stop();
        scheduler.start();
        scheduler.frame(t0 + Duration::from_secs(10));
        assert_eq!(seen.get(), Duration::ZERO);
    }
}

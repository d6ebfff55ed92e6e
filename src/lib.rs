//! # spark-motion
//!
//! Decorative motion engine for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity: effects write presentational state into signals,
//! hosts paint by reading them.
//!
//! ## Architecture
//!
//! One [`Scheduler`](scheduler::Scheduler) multiplexes every continuous
//! effect onto a single frame callback. Effects are small time-driven state
//! machines ([`Tickable`](scheduler::Tickable)s) that advance by the elapsed
//! time they are handed; interaction handlers are stateless event-to-style
//! mappings that occasionally hand a one-shot tickable to the scheduler:
//!
//! ```text
//! input events -> Pointer/PageMotion -> handlers write Visual signals
//! frame clock  -> Scheduler          -> effects write Visual signals
//! host paint effect <- reads Visual signals
//! ```
//!
//! The scheduler is an explicit instance owned by the composition root
//! ([`runtime::MotionLoop`]); time only enters through its frame callback,
//! so every piece is testable with synthetic clocks.
//!
//! ## Modules
//!
//! - [`scheduler`] - frame multiplexer and the `Tickable` contract
//! - [`effects`] - morph, glow, gradient, particles, typewriter, counters,
//!   preloader, carousel, ripple, reveals, cursor trail, scroll tweens
//! - [`interact`] - pointer regions, tilt, magnetic, visibility triggers,
//!   scroll-derived page chrome
//! - [`visual`] - the reactive style surface
//! - [`runtime`] - drive loop, suspend policy, terminal session

pub mod config;
pub mod ease;
pub mod effects;
pub mod error;
pub mod input;
pub mod interact;
pub mod runtime;
pub mod scheduler;
pub mod types;
pub mod util;
pub mod visual;

// Re-export commonly used items
pub use types::*;

pub use config::MotionConfig;

pub use ease::{EASE_SMOOTH, EASE_SPRING, Easing, lerp, smooth_factor};

pub use error::MotionError;

pub use scheduler::{FaultPolicy, MAX_FRAME_DT, Scheduler, Tick, TickError, Tickable};

pub use visual::{GradientStops, Visual};

pub use effects::{
    Carousel, CountUp, CursorTrail, GlowPulse, GradientShift, MorphShape, Particle,
    ParticleField, Preloader, Reveal, RevealKind, Ripple, STAGGER_STEP, ScrollTween,
    Typewriter,
};

pub use interact::{
    MagnetPose, PageMotion, Pointer, PointerAction, PointerButton, PointerEvent,
    RegionHandlers, RegionId, TiltPose, VisibilityWatcher,
};

pub use input::{InputEvent, KeyPress};

pub use runtime::{MotionLoop, Suspend};

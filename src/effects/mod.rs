//! Decorative effects - the producers.
//!
//! Each effect is a self-contained time-driven state machine implementing
//! [`Tickable`](crate::scheduler::Tickable). It closes over the [`Visual`]
//! signals it animates, advances by the elapsed time handed to `update`,
//! and either runs for the page's lifetime (`Tick::Continue`) or retires
//! itself when its animation completes (`Tick::Done`). The scheduler has
//! no awareness of what any of them do.

pub mod carousel;
pub mod counter;
pub mod cursor_trail;
pub mod glow;
pub mod gradient;
pub mod morph;
pub mod particles;
pub mod preloader;
pub mod ripple;
pub mod scroll;
pub mod transition;
pub mod typewriter;

pub use carousel::Carousel;
pub use counter::CountUp;
pub use cursor_trail::CursorTrail;
pub use glow::GlowPulse;
pub use gradient::GradientShift;
pub use morph::MorphShape;
pub use particles::{Particle, ParticleField};
pub use preloader::Preloader;
pub use ripple::Ripple;
pub use scroll::ScrollTween;
pub use transition::{Reveal, RevealKind, STAGGER_STEP};
pub use typewriter::Typewriter;

//! Typewriter text reveal.
//!
//! One time-driven state machine: characters are revealed at a fixed
//! cadence, the caret lingers briefly after the last one, then the effect
//! retires itself. There are no nested timers - all progress is a function
//! of the elapsed time handed to `update`.

use std::time::Duration;

use unicode_width::UnicodeWidthStr;

use crate::scheduler::{Tick, TickError, Tickable};
use crate::visual::Visual;

/// Cadence of the reveal.
pub const CHAR_INTERVAL: Duration = Duration::from_millis(75);

/// How long the caret stays visible after the last character.
pub const CARET_HOLD: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    HoldCaret,
}

/// Reveals a string one character per interval, tracking the caret column
/// in display cells (wide glyphs advance it by two).
pub struct Typewriter {
    visual: Visual,
    chars: Vec<char>,
    revealed: usize,
    elapsed: Duration,
    phase: Phase,
}

impl Typewriter {
    /// Start a reveal of `text` on `visual`. The visual's text is cleared
    /// and the caret parked at column zero immediately.
    pub fn new(visual: Visual, text: &str) -> Self {
        visual.text.set(String::new());
        visual.caret.set(Some(0));
        Self {
            visual,
            chars: text.chars().collect(),
            revealed: 0,
            elapsed: Duration::ZERO,
            phase: Phase::Typing,
        }
    }

    fn publish(&self) {
        let prefix: String = self.chars[..self.revealed].iter().collect();
        let column = UnicodeWidthStr::width(prefix.as_str()) as u16;
        self.visual.text.set(prefix);
        self.visual.caret.set(Some(column));
    }
}

impl Tickable for Typewriter {
    fn update(&mut self, dt: Duration) -> Result<Tick, TickError> {
        self.elapsed += dt;

        match self.phase {
            Phase::Typing => {
                let mut advanced = false;
                while self.elapsed >= CHAR_INTERVAL && self.revealed < self.chars.len() {
                    self.elapsed -= CHAR_INTERVAL;
                    self.revealed += 1;
                    advanced = true;
                }
                if advanced {
                    self.publish();
                }
                if self.revealed == self.chars.len() {
                    self.phase = Phase::HoldCaret;
                    self.elapsed = Duration::ZERO;
                }
                Ok(Tick::Continue)
            }
            Phase::HoldCaret => {
                if self.elapsed >= CARET_HOLD {
                    self.visual.caret.set(None);
                    Ok(Tick::Done)
                } else {
                    Ok(Tick::Continue)
                }
            }
        }
    }
}

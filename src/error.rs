//! Error taxonomy.
//!
//! Almost nothing here can fail: duplicate registration and unknown-key
//! removal are defined as non-errors, and the scheduler has no state that
//! can corrupt. What remains is the terminal backend and faults reported
//! by individual tickables.

use thiserror::Error;

/// Errors surfaced by the motion engine.
#[derive(Debug, Error)]
pub enum MotionError {
    /// Terminal backend failure (raw mode, capture, event polling).
    #[error("terminal backend error: {0}")]
    Io(#[from] std::io::Error),

    /// A registered tickable failed during its update. Carried to the
    /// scheduler's fault hook; the sweep itself continues.
    #[error("effect `{key}` faulted: {message}")]
    Fault { key: String, message: String },
}

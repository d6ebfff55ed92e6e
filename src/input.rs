//! Input bridge - crossterm events in, engine events out.
//!
//! Converts crossterm's event types into the crate's pointer/key events,
//! polls with a timeout, and controls mouse capture and focus-change
//! reporting. Does not own routing policy; the runtime decides what each
//! event means.

use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyModifiers,
    MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind, poll,
    read,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

use crate::interact::pointer::{PointerButton, PointerEvent};

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// A key press reduced to what the runtime cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub ch: Option<char>,
    pub ctrl: bool,
    pub esc: bool,
}

/// Unified event type for the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer event (click, scroll, move).
    Pointer(PointerEvent),
    /// Key press.
    Key(KeyPress),
    /// Terminal resize (new width, height).
    Resize(u16, u16),
    /// Terminal gained (true) or lost (false) focus - the visibility
    /// signal the suspend policy listens to.
    Focus(bool),
    /// Unhandled event type.
    None,
}

// =============================================================================
// CONVERSION
// =============================================================================

/// Convert a crossterm mouse event to a pointer event.
///
/// Drags collapse into moves - decorative effects track position, not
/// drag gestures. Wheel notches become signed scroll deltas.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> PointerEvent {
    match event.kind {
        MouseEventKind::Down(btn) => {
            PointerEvent::down(convert_mouse_button(btn), event.column, event.row)
        }
        MouseEventKind::Up(btn) => {
            PointerEvent::up(convert_mouse_button(btn), event.column, event.row)
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            PointerEvent::move_to(event.column, event.row)
        }
        MouseEventKind::ScrollDown => PointerEvent::scroll(event.column, event.row, 1),
        MouseEventKind::ScrollUp => PointerEvent::scroll(event.column, event.row, -1),
        // Horizontal wheels don't scroll the page.
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => {
            PointerEvent::scroll(event.column, event.row, 0)
        }
    }
}

fn convert_mouse_button(btn: CrosstermMouseButton) -> PointerButton {
    match btn {
        CrosstermMouseButton::Left => PointerButton::Left,
        CrosstermMouseButton::Right => PointerButton::Right,
        CrosstermMouseButton::Middle => PointerButton::Middle,
    }
}

/// Convert a crossterm key event.
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyPress {
    KeyPress {
        ch: match event.code {
            KeyCode::Char(c) => Some(c),
            _ => None,
        },
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        esc: event.code == KeyCode::Esc,
    }
}

// =============================================================================
// POLLING
// =============================================================================

/// Poll for an event with a timeout. Returns None when the timeout
/// elapses quietly - the runtime uses the timeout as its frame pacing.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    Ok(match read()? {
        CrosstermEvent::Mouse(mouse) => InputEvent::Pointer(convert_mouse_event(mouse)),
        CrosstermEvent::Key(key) => InputEvent::Key(convert_key_event(key)),
        CrosstermEvent::Resize(w, h) => InputEvent::Resize(w, h),
        CrosstermEvent::FocusGained => InputEvent::Focus(true),
        CrosstermEvent::FocusLost => InputEvent::Focus(false),
        _ => InputEvent::None,
    })
}

// =============================================================================
// CAPTURE
// =============================================================================

/// Enable mouse capture and focus-change reporting.
pub fn enable_capture() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)
}

/// Disable mouse capture and focus-change reporting.
pub fn disable_capture() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture, DisableFocusChange)
}

// =============================================================================
// Tests
// =============================================================================

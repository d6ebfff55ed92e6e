//! Pointer state and per-region handler registry.
//!
//! Tracks the pointer through reactive signals and dispatches events to
//! rectangular watch regions: enter/leave as the hovered region changes,
//! move within a region, click on press-and-release inside the same
//! region. Region handlers receive the region's rectangle alongside the
//! event so pose mappings (tilt, magnetic) can work in local coordinates.
//!
//! An explicit instance owned by the runtime - no global registry.

use std::rc::Rc;

use spark_signals::{Signal, signal};

use crate::types::Rect;

// =============================================================================
// TYPES
// =============================================================================

/// Pointer action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Up,
    Move,
    Scroll,
}

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

/// A pointer event in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub button: PointerButton,
    pub x: u16,
    pub y: u16,
    /// Wheel rows for scroll events; positive scrolls content down.
    pub scroll_delta: i16,
}

impl PointerEvent {
    pub fn new(action: PointerAction, button: PointerButton, x: u16, y: u16) -> Self {
        Self { action, button, x, y, scroll_delta: 0 }
    }

    pub fn down(button: PointerButton, x: u16, y: u16) -> Self {
        Self::new(PointerAction::Down, button, x, y)
    }

    pub fn up(button: PointerButton, x: u16, y: u16) -> Self {
        Self::new(PointerAction::Up, button, x, y)
    }

    pub fn move_to(x: u16, y: u16) -> Self {
        Self::new(PointerAction::Move, PointerButton::None, x, y)
    }

    pub fn scroll(x: u16, y: u16, delta: i16) -> Self {
        Self { scroll_delta: delta, ..Self::new(PointerAction::Scroll, PointerButton::None, x, y) }
    }
}

// =============================================================================
// REGION HANDLERS
// =============================================================================

/// Identifier of a watch region.
pub type RegionId = usize;

/// Handler set for one region.
///
/// `Rc<dyn Fn>` so the same callback can be shared between handler slots.
#[derive(Default, Clone)]
pub struct RegionHandlers {
    pub on_enter: Option<Rc<dyn Fn(&PointerEvent, Rect)>>,
    pub on_leave: Option<Rc<dyn Fn(&PointerEvent, Rect)>>,
    pub on_move: Option<Rc<dyn Fn(&PointerEvent, Rect)>>,
    pub on_click: Option<Rc<dyn Fn(&PointerEvent, Rect)>>,
}

struct Region {
    id: RegionId,
    rect: Rect,
    handlers: RegionHandlers,
}

// =============================================================================
// POINTER
// =============================================================================

/// Pointer state plus the region registry.
pub struct Pointer {
    position: Signal<(f32, f32)>,
    is_down: Signal<bool>,
    hovered: Signal<Option<RegionId>>,
    regions: Vec<Region>,
    pressed: Option<RegionId>,
    next_id: RegionId,
}

impl Pointer {
    pub fn new() -> Self {
        Self {
            position: signal((0.0, 0.0)),
            is_down: signal(false),
            hovered: signal(None),
            regions: Vec::new(),
            pressed: None,
            next_id: 0,
        }
    }

    /// Pointer position in fractional cells (the cursor-trail target).
    pub fn position(&self) -> Signal<(f32, f32)> {
        self.position.clone()
    }

    /// Whether a button is currently held.
    pub fn is_down(&self) -> Signal<bool> {
        self.is_down.clone()
    }

    /// The region currently under the pointer, if any.
    pub fn hovered(&self) -> Signal<Option<RegionId>> {
        self.hovered.clone()
    }

    // =========================================================================
    // Region registry
    // =========================================================================

    /// Watch a rectangle. Later registrations sit on top for hit testing.
    pub fn watch(&mut self, rect: Rect, handlers: RegionHandlers) -> RegionId {
        let id = self.next_id;
        self.next_id += 1;
        self.regions.push(Region { id, rect, handlers });
        id
    }

    /// Stop watching. No-op for unknown ids.
    pub fn unwatch(&mut self, id: RegionId) {
        self.regions.retain(|region| region.id != id);
        if self.hovered.get() == Some(id) {
            self.hovered.set(None);
        }
        if self.pressed == Some(id) {
            self.pressed = None;
        }
    }

    /// Move a region after a relayout.
    pub fn move_region(&mut self, id: RegionId, rect: Rect) {
        if let Some(region) = self.regions.iter_mut().find(|region| region.id == id) {
            region.rect = rect;
        }
    }

    fn hit(&self, x: u16, y: u16) -> Option<(RegionId, Rect)> {
        self.regions
            .iter()
            .rev()
            .find(|region| region.rect.contains(x, y))
            .map(|region| (region.id, region.rect))
    }

    fn handlers_of(&self, id: RegionId) -> Option<(RegionHandlers, Rect)> {
        self.regions
            .iter()
            .find(|region| region.id == id)
            .map(|region| (region.handlers.clone(), region.rect))
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Feed one event through the state signals and region handlers.
    pub fn dispatch(&mut self, event: &PointerEvent) {
        self.position.set((event.x as f32, event.y as f32));
        match event.action {
            PointerAction::Down => self.is_down.set(true),
            PointerAction::Up => self.is_down.set(false),
            _ => {}
        }

        let hit = self.hit(event.x, event.y);
        let hit_id = hit.map(|(id, _)| id);

        // Enter/leave on hover change.
        let prev = self.hovered.get();
        if prev != hit_id {
            if let Some(prev_id) = prev {
                if let Some((handlers, rect)) = self.handlers_of(prev_id) {
                    if let Some(on_leave) = handlers.on_leave {
                        on_leave(event, rect);
                    }
                }
            }
            if let Some(id) = hit_id {
                if let Some((handlers, rect)) = self.handlers_of(id) {
                    if let Some(on_enter) = handlers.on_enter {
                        on_enter(event, rect);
                    }
                }
            }
            self.hovered.set(hit_id);
        }

        let Some((id, rect)) = hit else {
            if event.action == PointerAction::Up {
                self.pressed = None;
            }
            return;
        };
        let Some((handlers, _)) = self.handlers_of(id) else { return };

        match event.action {
            PointerAction::Move => {
                if let Some(on_move) = handlers.on_move {
                    on_move(event, rect);
                }
            }
            PointerAction::Down => self.pressed = Some(id),
            PointerAction::Up => {
                if self.pressed.take() == Some(id) {
                    if let Some(on_click) = handlers.on_click {
                        on_click(event, rect);
                    }
                }
            }
            PointerAction::Scroll => {}
        }
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

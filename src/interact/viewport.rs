//! Scroll-visibility triggers.
//!
//! The terminal analog of an intersection observer: watch element rects
//! against the visible band of a scrolling page and fire a callback once
//! when enough of the element has scrolled into view. Producers use this
//! to start reveals, counters and typewriters lazily.

use crate::types::Rect;

/// Identifier of a visibility watch.
pub type WatchId = usize;

struct Watch {
    id: WatchId,
    rect: Rect,
    threshold: f32,
    callback: Option<Box<dyn FnOnce()>>,
}

/// Fire-once visibility watcher over a vertically scrolling page.
pub struct VisibilityWatcher {
    watches: Vec<Watch>,
    next_id: WatchId,
}

/// Fraction of `rect`'s rows inside the band `[scroll_y, scroll_y + rows)`.
pub fn visible_fraction(rect: Rect, scroll_y: f32, rows: u16) -> f32 {
    if rect.height == 0 {
        return 0.0;
    }
    let top = rect.y as f32;
    let bottom = rect.bottom() as f32;
    let band_top = scroll_y;
    let band_bottom = scroll_y + rows as f32;

    let overlap = (bottom.min(band_bottom) - top.max(band_top)).max(0.0);
    overlap / rect.height as f32
}

impl VisibilityWatcher {
    pub fn new() -> Self {
        Self { watches: Vec::new(), next_id: 0 }
    }

    /// Watch `rect`; `callback` fires once when at least `threshold` of it
    /// is visible. Typical thresholds: 0.1 for reveals, 0.5 for counters.
    pub fn observe(
        &mut self,
        rect: Rect,
        threshold: f32,
        callback: impl FnOnce() + 'static,
    ) -> WatchId {
        let id = self.next_id;
        self.next_id += 1;
        self.watches.push(Watch {
            id,
            rect,
            // A zero threshold still requires some visible sliver.
            threshold: threshold.clamp(0.0, 1.0).max(f32::MIN_POSITIVE),
            callback: Some(Box::new(callback)),
        });
        id
    }

    /// Drop a watch before it fires. No-op for unknown or fired ids.
    pub fn unobserve(&mut self, id: WatchId) {
        self.watches.retain(|watch| watch.id != id);
    }

    /// Evaluate all watches against the current scroll position. Fired
    /// watches are removed; each callback runs at most once, ever.
    pub fn poll(&mut self, scroll_y: f32, viewport_rows: u16) {
        let mut fired = Vec::new();
        for watch in &mut self.watches {
            if visible_fraction(watch.rect, scroll_y, viewport_rows) >= watch.threshold {
                if let Some(callback) = watch.callback.take() {
                    callback();
                }
                fired.push(watch.id);
            }
        }
        self.watches.retain(|watch| !fired.contains(&watch.id));
    }

    /// Number of watches still pending.
    pub fn pending(&self) -> usize {
        self.watches.len()
    }
}

impl Default for VisibilityWatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_visible_fraction() {
        let rect = Rect::new(0, 100, 10, 10);

        assert_eq!(visible_fraction(rect, 0.0, 24), 0.0);
        assert_eq!(visible_fraction(rect, 100.0, 24), 1.0);
        // Band ends halfway through the rect.
        assert_eq!(visible_fraction(rect, 81.0, 24), 0.5);
        // Scrolled past it entirely.
        assert_eq!(visible_fraction(rect, 200.0, 24), 0.0);
    }

    #[test]
    fn test_fires_once_at_threshold() {
        let mut watcher = VisibilityWatcher::new();
        let fired = Rc::new(Cell::new(0));
        let f = fired.clone();
        watcher.observe(Rect::new(0, 100, 10, 10), 0.5, move || f.set(f.get() + 1));

        watcher.poll(0.0, 24);
        assert_eq!(fired.get(), 0);
        assert_eq!(watcher.pending(), 1);

        watcher.poll(90.0, 24);
        assert_eq!(fired.get(), 1);
        assert_eq!(watcher.pending(), 0);

        // Staying visible does not refire.
        watcher.poll(95.0, 24);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_unobserve_prevents_fire() {
        let mut watcher = VisibilityWatcher::new();
        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();
        let id = watcher.observe(Rect::new(0, 0, 10, 5), 0.1, move || f.set(true));

        watcher.unobserve(id);
        watcher.poll(0.0, 24);
        assert!(!fired.get());
    }

    #[test]
    fn test_multiple_watches_fire_independently() {
        let mut watcher = VisibilityWatcher::new();
        let near = Rc::new(Cell::new(false));
        let far = Rc::new(Cell::new(false));

        let n = near.clone();
        watcher.observe(Rect::new(0, 10, 10, 5), 0.1, move || n.set(true));
        let f = far.clone();
        watcher.observe(Rect::new(0, 300, 10, 5), 0.1, move || f.set(true));

        watcher.poll(0.0, 24);
        assert!(near.get());
        assert!(!far.get());
        assert_eq!(watcher.pending(), 1);
    }

    #[test]
    fn test_zero_height_rect_never_fires() {
        let mut watcher = VisibilityWatcher::new();
        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();
        watcher.observe(Rect::new(0, 5, 10, 0), 0.1, move || f.set(true));

        watcher.poll(0.0, 24);
        assert!(!fired.get());
    }
}

//! Magnetic button pull.

use crate::interact::pointer::{Pointer, RegionHandlers, RegionId};
use crate::types::Rect;
use crate::visual::Visual;

use std::rc::Rc;

/// Maximum horizontal pull, columns. Terminal cells are taller than wide,
/// so the vertical pull is roughly half to look symmetric.
pub const MAX_PULL_COLS: f32 = 2.0;
pub const MAX_PULL_ROWS: f32 = 1.0;

/// Scale applied while the pointer is over the element.
pub const HOVER_SCALE: f32 = 1.05;

/// Offset pose pulling an element toward the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnetPose {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

/// Map a pointer position to a magnetic pull.
pub fn magnet_pose(rect: Rect, x: f32, y: f32) -> MagnetPose {
    let (cx, cy) = rect.center();
    let half_w = (rect.width as f32 / 2.0).max(1.0);
    let half_h = (rect.height as f32 / 2.0).max(1.0);

    let rel_x = ((x - cx) / half_w).clamp(-1.0, 1.0);
    let rel_y = ((y - cy) / half_h).clamp(-1.0, 1.0);

    MagnetPose {
        offset_x: rel_x * MAX_PULL_COLS,
        offset_y: rel_y * MAX_PULL_ROWS,
        scale: HOVER_SCALE,
    }
}

/// Wire magnetic behavior onto a pointer region for `visual`.
pub fn attach(pointer: &mut Pointer, rect: Rect, visual: Visual) -> RegionId {
    let on_move_visual = visual.clone();
    let on_leave_visual = visual;

    pointer.watch(
        rect,
        RegionHandlers {
            on_move: Some(Rc::new(move |event, rect| {
                let pose = magnet_pose(rect, event.x as f32, event.y as f32);
                on_move_visual.offset_x.set(pose.offset_x);
                on_move_visual.offset_y.set(pose.offset_y);
                on_move_visual.scale.set(pose.scale);
            })),
            on_leave: Some(Rc::new(move |_, _| {
                on_leave_visual.reset_pose();
            })),
            ..Default::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interact::pointer::PointerEvent;

    #[test]
    fn test_center_has_no_pull() {
        let pose = magnet_pose(Rect::new(0, 0, 20, 4), 10.0, 2.0);
        assert_eq!(pose.offset_x, 0.0);
        assert_eq!(pose.offset_y, 0.0);
        assert_eq!(pose.scale, HOVER_SCALE);
    }

    #[test]
    fn test_pull_follows_pointer_direction() {
        let rect = Rect::new(0, 0, 20, 4);

        let right = magnet_pose(rect, 20.0, 2.0);
        assert_eq!(right.offset_x, MAX_PULL_COLS);
        assert_eq!(right.offset_y, 0.0);

        let up_left = magnet_pose(rect, 0.0, 0.0);
        assert_eq!(up_left.offset_x, -MAX_PULL_COLS);
        assert_eq!(up_left.offset_y, -MAX_PULL_ROWS);
    }

    #[test]
    fn test_attach_writes_and_resets() {
        let mut pointer = Pointer::new();
        let visual = Visual::new();
        attach(&mut pointer, Rect::new(0, 0, 20, 4), visual.clone());

        pointer.dispatch(&PointerEvent::move_to(19, 3));
        assert!(visual.offset_x.get() > 0.0);
        assert!(visual.offset_y.get() > 0.0);
        assert_eq!(visual.scale.get(), HOVER_SCALE);

        pointer.dispatch(&PointerEvent::move_to(60, 20));
        assert_eq!(visual.offset_x.get(), 0.0);
        assert_eq!(visual.scale.get(), 1.0);
    }
}

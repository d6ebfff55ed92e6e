//! 3D card tilt on hover.

use crate::interact::pointer::{Pointer, RegionHandlers, RegionId};
use crate::types::Rect;
use crate::visual::Visual;

use std::rc::Rc;

/// Maximum tilt at the rect edges, degrees.
pub const MAX_TILT_DEG: f32 = 10.0;

/// Scale applied while tilting.
pub const HOVER_SCALE: f32 = 1.02;

/// Tilt pose computed from a pointer position within a rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltPose {
    pub tilt_x: f32,
    pub tilt_y: f32,
    pub scale: f32,
}

/// Map a pointer position to a tilt pose.
///
/// The card leans toward the pointer: above center tips the top away
/// (negative x-tilt), right of center turns the right edge back.
pub fn tilt_pose(rect: Rect, x: f32, y: f32) -> TiltPose {
    let (cx, cy) = rect.center();
    let half_w = (rect.width as f32 / 2.0).max(1.0);
    let half_h = (rect.height as f32 / 2.0).max(1.0);

    let rel_x = ((x - cx) / half_w).clamp(-1.0, 1.0);
    let rel_y = ((y - cy) / half_h).clamp(-1.0, 1.0);

    TiltPose {
        tilt_x: rel_y * -MAX_TILT_DEG,
        tilt_y: rel_x * MAX_TILT_DEG,
        scale: HOVER_SCALE,
    }
}

/// Wire tilt behavior onto a pointer region for `visual`.
///
/// Returns the region id; `Pointer::unwatch` tears it down.
pub fn attach(pointer: &mut Pointer, rect: Rect, visual: Visual) -> RegionId {
    let on_move_visual = visual.clone();
    let on_leave_visual = visual;

    pointer.watch(
        rect,
        RegionHandlers {
            on_move: Some(Rc::new(move |event, rect| {
                let pose = tilt_pose(rect, event.x as f32, event.y as f32);
                on_move_visual.tilt_x.set(pose.tilt_x);
                on_move_visual.tilt_y.set(pose.tilt_y);
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
    fn test_center_is_flat() {
        let pose = tilt_pose(Rect::new(0, 0, 20, 10), 10.0, 5.0);
        assert_eq!(pose.tilt_x, 0.0);
        assert_eq!(pose.tilt_y, 0.0);
        assert_eq!(pose.scale, HOVER_SCALE);
    }

    #[test]
    fn test_edges_reach_max_tilt() {
        let rect = Rect::new(0, 0, 20, 10);

        let right = tilt_pose(rect, 20.0, 5.0);
        assert_eq!(right.tilt_y, MAX_TILT_DEG);

        let top = tilt_pose(rect, 10.0, 0.0);
        assert_eq!(top.tilt_x, MAX_TILT_DEG);

        let bottom = tilt_pose(rect, 10.0, 10.0);
        assert_eq!(bottom.tilt_x, -MAX_TILT_DEG);
    }

    #[test]
    fn test_pose_clamped_outside_rect() {
        let pose = tilt_pose(Rect::new(0, 0, 10, 10), 100.0, 5.0);
        assert_eq!(pose.tilt_y, MAX_TILT_DEG);
    }

    #[test]
    fn test_attach_writes_and_resets() {
        let mut pointer = Pointer::new();
        let visual = Visual::new();
        attach(&mut pointer, Rect::new(0, 0, 10, 10), visual.clone());

        pointer.dispatch(&PointerEvent::move_to(9, 5));
        assert!(visual.tilt_y.get() > 0.0);
        assert_eq!(visual.scale.get(), HOVER_SCALE);

        pointer.dispatch(&PointerEvent::move_to(50, 50));
        assert_eq!(visual.tilt_y.get(), 0.0);
        assert_eq!(visual.scale.get(), 1.0);
    }
}

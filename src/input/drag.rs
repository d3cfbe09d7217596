//! Pointer handlers and per-handle edit rules for the crop rectangle.
//!
//! Pointer-move runs at display frequency, so the edit path is pure
//! arithmetic on the rectangle: resolve the pointer into image space,
//! apply the handle-specific rule, then funnel through the final safety
//! clamp. All rules anchor the edge opposite the dragged handle, so no
//! drag sequence can flip the rectangle inside out.

use crate::constants::MIN_CROP_SIZE;
use crate::input::coords::DisplayTransform;
use crate::input::hit_test::{self, HitTarget};
use crate::input::state::{CropState, DragMode, DragSession};
use crate::types::{CanvasPoint, CropRect, Handle, ImagePoint};

/// Pointer-down while crop mode is active. Decides the drag mode from the
/// hit target and captures the drag. Returns true if the state changed.
pub fn pointer_down(crop: &mut CropState, p: CanvasPoint, xform: &DisplayTransform) -> bool {
    if !crop.is_active() || crop.is_dragging() {
        return false;
    }

    let image_pt = xform.to_image(p);

    let Some(rect) = crop.rect() else {
        start_new_rect(crop, image_pt);
        return true;
    };

    match hit_test::hit_target(&rect, p, xform) {
        HitTarget::Handle(h) => {
            *crop = CropState::Dragging {
                rect,
                session: DragSession {
                    mode: DragMode::Resize(h),
                    start: image_pt,
                },
            };
        }
        HitTarget::Inside => {
            *crop = CropState::Dragging {
                rect,
                session: DragSession {
                    mode: DragMode::Move {
                        offset_x: image_pt.x - rect.x,
                        offset_y: image_pt.y - rect.y,
                    },
                    start: image_pt,
                },
            };
        }
        HitTarget::Outside => {
            // Discard the old rectangle and drag a fresh one from here.
            start_new_rect(crop, image_pt);
        }
    }
    true
}

/// Pointer-move while a drag is captured. Applies the handle edit rule and
/// re-clamps. Returns true when the rectangle may have changed (the caller
/// then resyncs the numeric fields and requests a redraw).
pub fn pointer_move(
    crop: &mut CropState,
    p: CanvasPoint,
    xform: &DisplayTransform,
    max_w: f32,
    max_h: f32,
) -> bool {
    let CropState::Dragging { rect, session } = crop else {
        return false;
    };
    let image_pt = xform.to_image(p);

    match session.mode {
        DragMode::Move { offset_x, offset_y } => {
            rect.x = (image_pt.x - offset_x).clamp(0.0, (max_w - rect.w).max(0.0));
            rect.y = (image_pt.y - offset_y).clamp(0.0, (max_h - rect.h).max(0.0));
        }
        DragMode::Resize(handle) => {
            let candidate = apply_handle_rule(handle, rect, image_pt, max_w, max_h);
            // A candidate collapsed below 1px means the pointer crossed the
            // anchored edge; drop the whole edit to prevent inversion.
            if candidate.w >= MIN_CROP_SIZE && candidate.h >= MIN_CROP_SIZE {
                *rect = candidate;
            }
        }
    }

    rect.clamp_to(max_w, max_h);
    true
}

/// Pointer-up: release the captured drag, keep the rectangle.
pub fn pointer_up(crop: &mut CropState) {
    if let CropState::Dragging { rect, .. } = crop {
        *crop = CropState::Active { rect: Some(*rect) };
    }
}

/// Seed a 1x1 rectangle at the click point and capture a south-east drag,
/// so the fresh rectangle grows outward from the anchor as the pointer
/// moves.
fn start_new_rect(crop: &mut CropState, image_pt: ImagePoint) {
    *crop = CropState::Dragging {
        rect: CropRect::new(image_pt.x, image_pt.y, 1.0, 1.0),
        session: DragSession {
            mode: DragMode::Resize(Handle::Se),
            start: image_pt,
        },
    };
}

/// The handle-specific edit rule, in image space. Edge handles move one
/// edge against the opposite anchored edge; corner handles compose the two
/// adjacent edge rules independently per axis.
fn apply_handle_rule(
    handle: Handle,
    r: &CropRect,
    p: ImagePoint,
    max_w: f32,
    max_h: f32,
) -> CropRect {
    let mut out = *r;
    match handle {
        Handle::N => {
            out.y = p.y.clamp(0.0, r.y + r.h - 1.0);
            out.h = r.y + r.h - out.y;
        }
        Handle::S => {
            out.h = (p.y - r.y).clamp(1.0, max_h - r.y);
        }
        Handle::W => {
            out.x = p.x.clamp(0.0, r.x + r.w - 1.0);
            out.w = r.x + r.w - out.x;
        }
        Handle::E => {
            out.w = (p.x - r.x).clamp(1.0, max_w - r.x);
        }
        Handle::Nw => {
            out.x = p.x.clamp(0.0, r.x + r.w - 1.0);
            out.y = p.y.clamp(0.0, r.y + r.h - 1.0);
            out.w = r.x + r.w - out.x;
            out.h = r.y + r.h - out.y;
        }
        Handle::Ne => {
            out.y = p.y.clamp(0.0, r.y + r.h - 1.0);
            out.w = (p.x - r.x).clamp(1.0, max_w - r.x);
            out.h = r.y + r.h - out.y;
        }
        Handle::Sw => {
            out.x = p.x.clamp(0.0, r.x + r.w - 1.0);
            out.w = r.x + r.w - out.x;
            out.h = (p.y - r.y).clamp(1.0, max_h - r.y);
        }
        Handle::Se => {
            out.w = (p.x - r.x).clamp(1.0, max_w - r.x);
            out.h = (p.y - r.y).clamp(1.0, max_h - r.y);
        }
    }
    out
}

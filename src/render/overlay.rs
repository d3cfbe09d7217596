//! Crop overlay rendering: dimming mask, border, guides, handles.
//!
//! The renderer is a pure function from crop state to a list of
//! backend-agnostic draw commands; the GUI layer replays them onto its
//! painter. This keeps the draw order and geometry testable without a
//! window.

use serde::Serialize;

use crate::constants::{
    CROP_BORDER_WIDTH, GUIDE_DASH, GUIDE_GAP, GUIDE_LINE_WIDTH, HANDLE_SIZE, MASK_ALPHA,
};
use crate::input::coords::DisplayTransform;
use crate::input::hit_test::handle_points;
use crate::types::{CanvasPoint, CanvasRect, CropRect, ImagePoint};

/// An RGBA color, straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba { r: 255, g: 255, b: 255, a: 255 };
    pub const BLACK: Rgba = Rgba { r: 0, g: 0, b: 0, a: 255 };

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// One overlay draw command, in canvas space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCmd {
    /// Dim everything outside `window` within `outer`: a single even-odd
    /// fill of both paths. Backends without an even-odd fill rule realize
    /// it via [`even_odd_surround`], which must never overlap the window
    /// or itself (overlaps would double-darken).
    MaskEvenOdd {
        outer: CanvasRect,
        window: CanvasRect,
        color: Rgba,
    },
    FillRect {
        rect: CanvasRect,
        color: Rgba,
    },
    StrokeRect {
        rect: CanvasRect,
        width: f32,
        color: Rgba,
    },
    DashedLine {
        from: CanvasPoint,
        to: CanvasPoint,
        width: f32,
        color: Rgba,
        dash: f32,
        gap: f32,
    },
}

/// Build the overlay command list for the current crop rectangle.
///
/// Order matters: mask first, then border, then guides, then the eight
/// handle squares on top of everything.
pub fn overlay_commands(
    canvas_w: f32,
    canvas_h: f32,
    rect: &CropRect,
    xform: &DisplayTransform,
    guides: bool,
) -> Vec<DrawCmd> {
    let tl = xform.to_canvas(ImagePoint::new(rect.x, rect.y));
    let br = xform.to_canvas(ImagePoint::new(rect.right(), rect.bottom()));
    let window = CanvasRect::new(tl.x, tl.y, br.x - tl.x, br.y - tl.y);

    let mut cmds = Vec::with_capacity(2 + 4 + 16);

    cmds.push(DrawCmd::MaskEvenOdd {
        outer: CanvasRect::new(0.0, 0.0, canvas_w, canvas_h),
        window,
        color: Rgba::new(0, 0, 0, MASK_ALPHA),
    });

    cmds.push(DrawCmd::StrokeRect {
        rect: window,
        width: CROP_BORDER_WIDTH,
        color: Rgba::WHITE,
    });

    if guides {
        let guide_color = Rgba::new(255, 255, 255, 179);
        for i in 1..3 {
            let x = window.x + window.w * i as f32 / 3.0;
            let y = window.y + window.h * i as f32 / 3.0;
            cmds.push(DrawCmd::DashedLine {
                from: CanvasPoint::new(x, window.y),
                to: CanvasPoint::new(x, window.bottom()),
                width: GUIDE_LINE_WIDTH,
                color: guide_color,
                dash: GUIDE_DASH,
                gap: GUIDE_GAP,
            });
            cmds.push(DrawCmd::DashedLine {
                from: CanvasPoint::new(window.x, y),
                to: CanvasPoint::new(window.right(), y),
                width: GUIDE_LINE_WIDTH,
                color: guide_color,
                dash: GUIDE_DASH,
                gap: GUIDE_GAP,
            });
        }
    }

    let half = HANDLE_SIZE / 2.0;
    for (_, hp) in handle_points(rect, xform) {
        let square = CanvasRect::new(hp.x - half, hp.y - half, HANDLE_SIZE, HANDLE_SIZE);
        cmds.push(DrawCmd::FillRect {
            rect: square,
            color: Rgba::WHITE,
        });
        cmds.push(DrawCmd::StrokeRect {
            rect: square,
            width: 1.0,
            color: Rgba::BLACK,
        });
    }

    cmds
}

/// The four rectangles that tile `outer` minus `window`: top and bottom
/// bands at full width, left and right bands between them. Disjoint by
/// construction, so painting all four with a translucent fill darkens
/// every outside pixel exactly once.
pub fn even_odd_surround(outer: &CanvasRect, window: &CanvasRect) -> [CanvasRect; 4] {
    [
        // Top band.
        CanvasRect::new(outer.x, outer.y, outer.w, window.y - outer.y),
        // Bottom band.
        CanvasRect::new(outer.x, window.bottom(), outer.w, outer.bottom() - window.bottom()),
        // Left band.
        CanvasRect::new(outer.x, window.y, window.x - outer.x, window.h),
        // Right band.
        CanvasRect::new(window.right(), window.y, outer.right() - window.right(), window.h),
    ]
}

//! Coordinate conversion between image space and canvas space.
//!
//! The image is letterboxed into the canvas: scaled by the smaller of the
//! two axis ratios (aspect-preserving, never cropped or stretched) and
//! centered. This module is the only path between the crop rectangle and
//! canvas-space pixel positions used for hit-testing and drawing.

use crate::types::{CanvasPoint, ImagePoint};

/// The affine map from image space onto the canvas: uniform scale plus
/// centering offsets. Pure and cheap; recomputed from the current image
/// and canvas dimensions whenever either changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransform {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
    image_w: f32,
    image_h: f32,
}

impl DisplayTransform {
    /// Letterbox an `image_w × image_h` image into a `canvas_w × canvas_h`
    /// surface.
    pub fn fit(image_w: f32, image_h: f32, canvas_w: f32, canvas_h: f32) -> Self {
        let scale = (canvas_w / image_w).min(canvas_h / image_h);
        Self {
            offset_x: (canvas_w - image_w * scale) / 2.0,
            offset_y: (canvas_h - image_h * scale) / 2.0,
            scale,
            image_w,
            image_h,
        }
    }

    /// Defensive default for the no-image-loaded case: both conversions
    /// pass coordinates through unchanged.
    pub fn identity() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
            image_w: f32::INFINITY,
            image_h: f32::INFINITY,
        }
    }

    /// Canvas point to image point, clamped into `[0, w] × [0, h]`.
    pub fn to_image(&self, p: CanvasPoint) -> ImagePoint {
        let x = (p.x - self.offset_x) / self.scale;
        let y = (p.y - self.offset_y) / self.scale;
        ImagePoint {
            x: x.clamp(0.0, self.image_w),
            y: y.clamp(0.0, self.image_h),
        }
    }

    /// Image point to canvas point. Unclamped: canvas points derived from
    /// valid image points are always on-surface.
    pub fn to_canvas(&self, p: ImagePoint) -> CanvasPoint {
        CanvasPoint {
            x: p.x * self.scale + self.offset_x,
            y: p.y * self.scale + self.offset_y,
        }
    }
}

//! Core geometry vocabulary shared across the editor.
//!
//! Two coordinate systems exist side by side:
//!
//! - **Image space**: the logical working bitmap (`current_w × current_h`).
//!   The crop rectangle lives here exclusively.
//! - **Canvas space**: the on-screen drawing surface. Related to image
//!   space by the letterboxing transform in [`crate::input::coords`].
//!
//! The distinct point types keep the two spaces from being mixed up at
//! compile time.

use serde::Serialize;

use crate::constants::{DEFAULT_CROP_FRACTION, MIN_CROP_SIZE};

/// A point in image-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImagePoint {
    pub x: f32,
    pub y: f32,
}

impl ImagePoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A point in canvas-display space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

impl CanvasPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another canvas point.
    pub fn distance(self, other: CanvasPoint) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An axis-aligned rectangle in canvas space, used by the overlay renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl CanvasRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// The single active crop rectangle, in image-pixel space.
///
/// Standing invariant after any mutation settles:
/// `0 <= x`, `0 <= y`, `x + w <= current_w`, `y + h <= current_h`,
/// `w >= 1`, `h >= 1`. Every mutation path funnels through
/// [`CropRect::clamp_to`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl CropRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Default rectangle seeded on entering crop mode: 60% of the image,
    /// centered, rounded to whole pixels.
    pub fn seeded(current_w: f32, current_h: f32) -> Self {
        let w = (current_w * DEFAULT_CROP_FRACTION).round();
        let h = (current_h * DEFAULT_CROP_FRACTION).round();
        Self {
            x: ((current_w - w) / 2.0).round(),
            y: ((current_h - h) / 2.0).round(),
            w,
            h,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Point-in-rect test in image space (edges inclusive).
    pub fn contains(&self, p: ImagePoint) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Final safety clamp: pulls the rectangle back inside
    /// `[0, max_w] × [0, max_h]` with a 1px size floor. Idempotent on an
    /// already-valid rectangle.
    pub fn clamp_to(&mut self, max_w: f32, max_h: f32) {
        self.x = self.x.clamp(0.0, (max_w - self.w).max(0.0));
        self.y = self.y.clamp(0.0, (max_h - self.h).max(0.0));
        self.w = self
            .w
            .clamp(MIN_CROP_SIZE, (max_w - self.x).max(MIN_CROP_SIZE));
        self.h = self
            .h
            .clamp(MIN_CROP_SIZE, (max_h - self.y).max(MIN_CROP_SIZE));
    }

    /// True when the standing invariant holds for the given bounds.
    pub fn is_valid_for(&self, max_w: f32, max_h: f32) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.w >= MIN_CROP_SIZE
            && self.h >= MIN_CROP_SIZE
            && self.right() <= max_w
            && self.bottom() <= max_h
    }
}

/// One of the eight fixed resize handles on the crop rectangle's perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Handle {
    Nw,
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
}

impl Handle {
    /// Hit-test priority order. Ties between nearly coincident handles on
    /// a degenerate rectangle resolve to the first match in this order.
    pub const ALL: [Handle; 8] = [
        Handle::Nw,
        Handle::N,
        Handle::Ne,
        Handle::E,
        Handle::Se,
        Handle::S,
        Handle::Sw,
        Handle::W,
    ];

    /// The resize-direction cursor affordance for this handle.
    pub fn cursor(self) -> Cursor {
        match self {
            Handle::N | Handle::S => Cursor::ResizeNs,
            Handle::E | Handle::W => Cursor::ResizeEw,
            Handle::Ne | Handle::Sw => Cursor::ResizeNesw,
            Handle::Nw | Handle::Se => Cursor::ResizeNwse,
        }
    }
}

/// Cursor styles the hit-test resolver can request. The GUI layer maps
/// these onto whatever glyphs the windowing toolkit provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cursor {
    Default,
    /// Outside the crop rectangle: "start a new rectangle here".
    Crosshair,
    /// Inside the crop rectangle: dragging moves it.
    Move,
    ResizeNs,
    ResizeEw,
    ResizeNesw,
    ResizeNwse,
}

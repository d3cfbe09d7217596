//! Crop state machine - explicit states for crop-mode interaction.
//!
//! Replaces the boolean-flag-plus-nullable-field encoding (`active`,
//! `rect: null`, `drag_handle: null`) with tagged variants, making
//! illegal combinations (a captured drag with no rectangle) unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Active           (enter crop mode; seeds a rect if none dormant)
//! Active   -> Dragging         (pointer down: handle grab, interior move,
//!                               or fresh rectangle from the click point)
//! Dragging -> Active           (pointer up)
//! Active   -> Idle             (exit crop mode; rect stays dormant)
//! Any      -> Idle, no rect    (full reset / new image load)
//! ```

use crate::types::{CropRect, Handle, ImagePoint};

/// What a captured pointer drag is editing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragMode {
    /// Resizing by one of the eight perimeter handles.
    Resize(Handle),
    /// Moving the whole rectangle. The offset is the pointer's distance
    /// from the rectangle's top-left at grab time, so the drag preserves
    /// the grab position instead of snapping the corner to the pointer.
    Move { offset_x: f32, offset_y: f32 },
}

/// Transient per-drag state, alive between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub mode: DragMode,
    /// Image-space point where the drag started.
    pub start: ImagePoint,
}

/// The crop-mode interaction state. Owns the single active crop rectangle;
/// no other component mutates it.
#[derive(Debug, Clone, PartialEq)]
pub enum CropState {
    /// Crop mode off. A rectangle from a prior session may survive here
    /// until a full reset discards it.
    Idle { dormant: Option<CropRect> },

    /// Crop mode on, no drag captured. `rect` is `None` only before the
    /// first rectangle of a session exists.
    Active { rect: Option<CropRect> },

    /// A handle (or the interior) is captured by the pointer.
    Dragging { rect: CropRect, session: DragSession },
}

impl Default for CropState {
    fn default() -> Self {
        Self::Idle { dormant: None }
    }
}

impl CropState {
    /// True while crop mode is on (with or without a captured drag).
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle { .. })
    }

    /// True while a pointer drag is captured.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The current rectangle, if one exists in this state. Dormant
    /// rectangles (crop mode off) are not reported.
    pub fn rect(&self) -> Option<CropRect> {
        match self {
            Self::Idle { .. } => None,
            Self::Active { rect } => *rect,
            Self::Dragging { rect, .. } => Some(*rect),
        }
    }

    /// Replace the current rectangle. No-op unless crop mode is active.
    /// Used by the numeric field ports; pointer edits go through
    /// [`crate::input::drag`].
    pub fn set_rect(&mut self, new_rect: CropRect) {
        match self {
            Self::Idle { .. } => {}
            Self::Active { rect } => *rect = Some(new_rect),
            Self::Dragging { rect, .. } => *rect = new_rect,
        }
    }

    /// Enter crop mode. Revives a dormant rectangle from a prior session,
    /// otherwise seeds the default 60% centered rectangle.
    pub fn enter(&mut self, current_w: f32, current_h: f32) {
        if let Self::Idle { dormant } = self {
            let rect = dormant
                .take()
                .unwrap_or_else(|| CropRect::seeded(current_w, current_h));
            *self = Self::Active { rect: Some(rect) };
        }
    }

    /// Exit crop mode, keeping the rectangle dormant for the next session.
    pub fn exit(&mut self) {
        if self.is_active() {
            *self = Self::Idle {
                dormant: self.rect(),
            };
        }
    }

    /// Leave crop mode; with `full`, also discard the rectangle. A new
    /// image load always performs a full reset.
    pub fn reset(&mut self, full: bool) {
        if full {
            *self = Self::Idle { dormant: None };
        } else {
            self.exit();
        }
    }
}

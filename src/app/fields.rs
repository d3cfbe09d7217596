//! Numeric field ports.
//!
//! The core pushes rounded dimensions into these string-backed fields and
//! reads overrides back from them when committing a crop or resize. They
//! are plain data, decoupled from any widget type; the egui layer binds
//! text editors to the strings.

use crate::constants::MAX_OUTPUT_DIMENSION;
use crate::error::{EditorError, EditorResult};
use crate::input::state::CropState;
use crate::types::CropRect;

/// Crop width/height fields. Mirrors the rectangle after every geometry
/// change; direct edits write back into the rectangle, clamped so it
/// cannot grow past the image bound from its fixed top-left.
#[derive(Debug, Clone, Default)]
pub struct CropFields {
    pub w: String,
    pub h: String,
}

impl CropFields {
    /// Push the rectangle's rounded size into the fields.
    pub fn sync(&mut self, rect: &CropRect) {
        self.w = format!("{}", rect.w.round() as u32);
        self.h = format!("{}", rect.h.round() as u32);
    }

    /// Width field edited. Applies a valid positive integer to the
    /// rectangle, clamped to `current_w - x`, and echoes the clamped
    /// value. Invalid text is left alone until blur.
    pub fn width_edited(&mut self, crop: &mut CropState, current_w: f32) -> bool {
        let Ok(w) = self.w.trim().parse::<u32>() else {
            return false;
        };
        if w == 0 {
            return false;
        }
        let Some(mut rect) = crop.rect() else {
            return false;
        };
        rect.w = (w as f32).min(current_w - rect.x);
        crop.set_rect(rect);
        self.w = format!("{}", rect.w.round() as u32);
        true
    }

    /// Height counterpart of [`CropFields::width_edited`].
    pub fn height_edited(&mut self, crop: &mut CropState, current_h: f32) -> bool {
        let Ok(h) = self.h.trim().parse::<u32>() else {
            return false;
        };
        if h == 0 {
            return false;
        }
        let Some(mut rect) = crop.rect() else {
            return false;
        };
        rect.h = (h as f32).min(current_h - rect.y);
        crop.set_rect(rect);
        self.h = format!("{}", rect.h.round() as u32);
        true
    }

    /// On blur: resynchronize stale or invalid text to the numeric truth.
    pub fn resync(&mut self, crop: &CropState) {
        if let Some(rect) = crop.rect() {
            self.sync(&rect);
        }
    }
}

/// Resize target presets; each only fills the fields, the user still
/// commits explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizePreset {
    Hd,
    FourK,
    Square,
    Half,
    Double,
}

impl ResizePreset {
    pub const ALL: [ResizePreset; 5] = [
        ResizePreset::Hd,
        ResizePreset::FourK,
        ResizePreset::Square,
        ResizePreset::Half,
        ResizePreset::Double,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResizePreset::Hd => "HD",
            ResizePreset::FourK => "4K",
            ResizePreset::Square => "Square",
            ResizePreset::Half => "Half",
            ResizePreset::Double => "Double",
        }
    }

    /// Target dimensions for this preset, derived from the natural size.
    /// Width-driven presets keep the natural aspect ratio.
    pub fn dimensions(self, natural_w: u32, natural_h: u32) -> (u32, u32) {
        let ratio = natural_w as f32 / natural_h as f32;
        match self {
            ResizePreset::Hd => (1920, (1920.0 / ratio).round() as u32),
            ResizePreset::FourK => (3840, (3840.0 / ratio).round() as u32),
            ResizePreset::Square => {
                let side = natural_w.min(natural_h);
                (side, side)
            }
            ResizePreset::Half => (
                (natural_w as f32 / 2.0).round() as u32,
                (natural_h as f32 / 2.0).round() as u32,
            ),
            ResizePreset::Double => (natural_w * 2, natural_h * 2),
        }
    }
}

/// Resize width/height fields with optional aspect-ratio linking.
#[derive(Debug, Clone)]
pub struct ResizeFields {
    pub w: String,
    pub h: String,
    pub keep_aspect: bool,
}

impl Default for ResizeFields {
    fn default() -> Self {
        Self {
            w: String::new(),
            h: String::new(),
            keep_aspect: true,
        }
    }
}

impl ResizeFields {
    pub fn sync(&mut self, w: u32, h: u32) {
        self.w = w.to_string();
        self.h = h.to_string();
    }

    /// Parse and validate the target dimensions for a resize commit.
    pub fn parse_target(&self) -> EditorResult<(u32, u32)> {
        let w = self.w.trim().parse::<u32>().unwrap_or(0);
        let h = self.h.trim().parse::<u32>().unwrap_or(0);
        if w < 1 || h < 1 {
            return Err(EditorError::InvalidDimensions);
        }
        if w > MAX_OUTPUT_DIMENSION || h > MAX_OUTPUT_DIMENSION {
            return Err(EditorError::DimensionLimit);
        }
        Ok((w, h))
    }

    /// Width edited: with aspect linking on, derive height from the
    /// natural ratio.
    pub fn width_edited(&mut self, natural_w: u32, natural_h: u32) {
        if !self.keep_aspect {
            return;
        }
        if let Ok(w) = self.w.trim().parse::<u32>() {
            if w > 0 {
                let ratio = natural_w as f32 / natural_h as f32;
                self.h = format!("{}", (w as f32 / ratio).round() as u32);
            }
        }
    }

    /// Height counterpart of [`ResizeFields::width_edited`].
    pub fn height_edited(&mut self, natural_w: u32, natural_h: u32) {
        if !self.keep_aspect {
            return;
        }
        if let Ok(h) = self.h.trim().parse::<u32>() {
            if h > 0 {
                let ratio = natural_w as f32 / natural_h as f32;
                self.w = format!("{}", (h as f32 * ratio).round() as u32);
            }
        }
    }

    /// Fill the fields from a preset. Returns the chosen dimensions for
    /// the status line.
    pub fn apply_preset(&mut self, preset: ResizePreset, natural_w: u32, natural_h: u32) -> (u32, u32) {
        let (w, h) = preset.dimensions(natural_w, natural_h);
        self.sync(w, h);
        (w, h)
    }
}

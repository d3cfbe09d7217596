//! Application-wide constants.
//!
//! Centralizes magic numbers so interaction tuning and overlay styling
//! live in one place.

// ============================================================================
// Crop Interaction
// ============================================================================

/// Handle hit radius in canvas pixels (Euclidean distance). Canvas-space,
/// so the grab area is independent of the image's display scale.
pub const HANDLE_HIT_RADIUS: f32 = 8.0;

/// Minimum crop rectangle width/height in image pixels.
pub const MIN_CROP_SIZE: f32 = 1.0;

/// Fraction of the image covered by the seeded crop rectangle.
pub const DEFAULT_CROP_FRACTION: f32 = 0.6;

// ============================================================================
// Overlay Styling
// ============================================================================

/// Side length of the square handle markers, in canvas pixels.
pub const HANDLE_SIZE: f32 = 8.0;

/// Stroke width of the crop rectangle border.
pub const CROP_BORDER_WIDTH: f32 = 2.0;

/// Stroke width of the rule-of-thirds guide lines.
pub const GUIDE_LINE_WIDTH: f32 = 1.0;

/// Dash/gap lengths for the guide lines, in canvas pixels.
pub const GUIDE_DASH: f32 = 4.0;
pub const GUIDE_GAP: f32 = 4.0;

/// Alpha of the dimming mask outside the crop window (of 255).
pub const MASK_ALPHA: u8 = 128;

// ============================================================================
// Output Limits & Defaults
// ============================================================================

/// Safety ceiling for resize targets, per axis.
pub const MAX_OUTPUT_DIMENSION: u32 = 10_000;

/// Default quality for lossy export formats (0.0..=1.0).
pub const DEFAULT_EXPORT_QUALITY: f32 = 0.92;

/// Base name of exported files; the format extension is appended.
pub const EXPORT_BASENAME: &str = "image-edited";

//! Resize operation and presets.

use image::imageops::FilterType;
use tracing::info;

use crate::app::fields::ResizePreset;
use crate::app::state::EditorState;
use crate::error::{EditorError, EditorResult};

/// Commit a resize to the dimensions in the resize fields.
///
/// Validates the target (positive integers, 10,000px ceiling) before
/// touching any state; the resampled output becomes the new working
/// image.
pub fn apply_resize(state: &mut EditorState) -> EditorResult<()> {
    let image = state.image.as_ref().ok_or(EditorError::NoImage)?;
    let (w, h) = state.resize_fields.parse_target()?;

    let output = image.bitmap.resize_exact(w, h, FilterType::Lanczos3);
    info!(w, h, "resize applied");

    state.install_image(output, false);
    state.set_status(format!("Resize applied: {w}×{h} pixels"));
    Ok(())
}

/// Fill the resize fields from a preset. Only fills fields; the user
/// still commits with Apply.
pub fn apply_preset(state: &mut EditorState, preset: ResizePreset) -> EditorResult<()> {
    let image = state.image.as_ref().ok_or(EditorError::NoImage)?;
    let (w, h) = state
        .resize_fields
        .apply_preset(preset, image.natural_w, image.natural_h);
    state.set_status(format!("Applied {} preset: {w}×{h}", preset.label()));
    Ok(())
}

/// Refill the resize fields with the natural dimensions.
pub fn reset_fields_to_original(state: &mut EditorState) -> EditorResult<()> {
    let image = state.image.as_ref().ok_or(EditorError::NoImage)?;
    let (w, h) = (image.natural_w, image.natural_h);
    state.resize_fields.sync(w, h);
    state.set_status(format!("Reset to original size: {w}×{h}"));
    Ok(())
}

//! Crop Applier: cut the committed rectangle out of the source bitmap.
//!
//! The rectangle lives in working-image space; the source pixels live at
//! natural resolution. The two differ by a uniform ratio, so the commit
//! remaps, clamps against float drift, resamples, and atomically installs
//! the result as the new working image.

use image::imageops::FilterType;
use tracing::info;

use crate::app::state::EditorState;
use crate::error::{EditorError, EditorResult};
use crate::types::CropRect;

/// Map a working-space rectangle into natural-resolution source
/// coordinates, clamped into `[0, natural)` with 1px size floors. The
/// clamp guards against accumulated floating-point drift pushing the
/// rectangle fractionally outside bounds.
pub fn map_to_natural(
    rect: &CropRect,
    natural_w: u32,
    natural_h: u32,
    current_w: u32,
) -> (u32, u32, u32, u32) {
    debug_assert!(current_w > 0);
    // Uniform ratio: natural_h / current_h is equal by construction since
    // aspect is preserved through resize operations.
    let scale = natural_w as f32 / current_w as f32;

    let nw = natural_w as f32;
    let nh = natural_h as f32;

    let sx = (rect.x * scale).clamp(0.0, nw - 1.0);
    let sy = (rect.y * scale).clamp(0.0, nh - 1.0);
    let sw = (rect.w * scale).clamp(1.0, nw - sx);
    let sh = (rect.h * scale).clamp(1.0, nh - sy);

    let sx = sx.floor() as u32;
    let sy = sy.floor() as u32;
    let sw = (sw.round() as u32).clamp(1, natural_w - sx);
    let sh = (sh.round() as u32).clamp(1, natural_h - sy);
    (sx, sy, sw, sh)
}

/// Commit the active crop rectangle.
///
/// Target output size comes from the numeric field overrides when they
/// parse as positive integers, otherwise from the clamped source size.
/// On success the output becomes the new working image and crop mode
/// fully resets; on failure nothing changes.
pub fn apply_crop(state: &mut EditorState) -> EditorResult<()> {
    let (Some(image), Some(rect)) = (state.image.as_ref(), state.crop.rect()) else {
        return Err(EditorError::NoCropSelection);
    };

    let (sx, sy, sw, sh) = map_to_natural(
        &rect,
        image.natural_w,
        image.natural_h,
        image.current_w,
    );

    let target_w = parse_override(&state.crop_fields.w).unwrap_or(sw);
    let target_h = parse_override(&state.crop_fields.h).unwrap_or(sh);

    let output = image
        .bitmap
        .crop_imm(sx, sy, sw, sh)
        .resize_exact(target_w, target_h, FilterType::Lanczos3);

    info!(sx, sy, sw, sh, target_w, target_h, "crop applied");

    state.install_image(output, false);
    state.set_status(format!(
        "Crop applied: {target_w}×{target_h} (from {sw}×{sh} source area)"
    ));
    Ok(())
}

fn parse_override(text: &str) -> Option<u32> {
    match text.trim().parse::<u32>() {
        Ok(v) if v > 0 => Some(v),
        _ => None,
    }
}

//! Test helpers: bitmap and editor-state builders.

use cropdock::app::state::EditorState;
use image::{DynamicImage, Rgba, RgbaImage};

/// A deterministic opaque gradient bitmap; no two rows or columns are
/// identical, which keeps encoders honest about actual pixel content.
pub fn gradient_bitmap(w: u32, h: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(w, h, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    }))
}

/// Editor state with a freshly user-loaded `w × h` gradient.
pub fn loaded_state(w: u32, h: u32) -> EditorState {
    let mut state = EditorState::new();
    state.install_image(gradient_bitmap(w, h), true);
    state
}

/// Loaded state with crop mode already entered (seeded rectangle).
pub fn cropping_state(w: u32, h: u32) -> EditorState {
    let mut state = loaded_state(w, h);
    state.toggle_crop_mode();
    state
}

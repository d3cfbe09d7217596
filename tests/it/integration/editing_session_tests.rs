//! Whole-session flows: crop, resize, export, reset.

use cropdock::app::fields::ResizePreset;
use cropdock::app::state::ExportFormat;
use cropdock::ops;
use cropdock::types::CropRect;

use crate::helpers::{cropping_state, loaded_state};

#[test]
fn crop_then_resize_then_export() {
    let mut state = cropping_state(800, 600);

    ops::crop::apply_crop(&mut state).unwrap();
    assert_eq!(state.current_dims(), Some((480, 360)));

    state.resize_fields.sync(100, 75);
    ops::resize::apply_resize(&mut state).unwrap();
    assert_eq!(state.current_dims(), Some((100, 75)));

    let image = state.image.as_ref().unwrap();
    let bytes = ops::export::encode(image, ExportFormat::Png, 0.92).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (100, 75));
}

#[test]
fn preset_then_apply_resize() {
    let mut state = loaded_state(800, 600);

    ops::resize::apply_preset(&mut state, ResizePreset::Double).unwrap();
    assert_eq!(state.status, "Applied Double preset: 1600×1200");

    ops::resize::apply_resize(&mut state).unwrap();
    assert_eq!(state.current_dims(), Some((1600, 1200)));
    assert_eq!(state.status, "Resize applied: 1600×1200 pixels");
}

#[test]
fn reset_undoes_all_edits() {
    let mut state = cropping_state(800, 600);

    ops::crop::apply_crop(&mut state).unwrap();
    state.resize_fields.sync(64, 64);
    ops::resize::apply_resize(&mut state).unwrap();
    assert_eq!(state.current_dims(), Some((64, 64)));

    state.reset_to_original();
    assert_eq!(state.current_dims(), Some((800, 600)));
    assert_eq!(state.status, "Image has been reset to original.");
}

#[test]
fn reentering_crop_mode_revives_last_rect() {
    let mut state = cropping_state(800, 600);

    let custom = CropRect::new(10.0, 20.0, 300.0, 200.0);
    state.crop.set_rect(custom);
    state.toggle_crop_mode();
    assert!(!state.crop.is_active());

    state.toggle_crop_mode();
    assert_eq!(state.crop.rect(), Some(custom));
}

#[test]
fn new_load_discards_dormant_rect() {
    let mut state = cropping_state(800, 600);
    state.crop.set_rect(CropRect::new(5.0, 5.0, 50.0, 50.0));

    state.install_image(crate::helpers::gradient_bitmap(400, 400), true);
    assert_eq!(state.status, "Loaded 400×400");

    state.toggle_crop_mode();
    // Fresh seed for the new image, not the old session's rect.
    assert_eq!(state.crop.rect(), Some(CropRect::seeded(400.0, 400.0)));
}

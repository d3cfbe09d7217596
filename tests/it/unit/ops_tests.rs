//! Crop, resize, and export operations against real bitmaps.

use cropdock::app::state::{ExportFormat, LoadedImage};
use cropdock::error::EditorError;
use cropdock::ops;

use crate::helpers::{cropping_state, gradient_bitmap, loaded_state};

#[test]
fn apply_crop_with_seeded_rect() {
    let mut state = cropping_state(800, 600);

    ops::crop::apply_crop(&mut state).unwrap();

    let img = state.image.as_ref().unwrap();
    assert_eq!((img.current_w, img.current_h), (480, 360));
    assert_eq!((img.natural_w, img.natural_h), (480, 360));
    assert_eq!(
        state.status,
        "Crop applied: 480×360 (from 480×360 source area)"
    );
    // Crop session fully resets after a commit.
    assert!(!state.crop.is_active());
    assert_eq!(state.crop.rect(), None);
}

#[test]
fn apply_crop_without_selection_is_rejected() {
    let mut state = loaded_state(800, 600);
    let err = ops::crop::apply_crop(&mut state).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot apply crop: no crop area or image loaded"
    );
    // Nothing changed.
    let img = state.image.as_ref().unwrap();
    assert_eq!((img.current_w, img.current_h), (800, 600));
}

#[test]
fn crop_field_override_sets_output_size() {
    let mut state = cropping_state(800, 600);
    state.crop_fields.w = "240".to_string();
    state.crop_fields.h = "180".to_string();

    ops::crop::apply_crop(&mut state).unwrap();

    let img = state.image.as_ref().unwrap();
    assert_eq!((img.current_w, img.current_h), (240, 180));
    assert_eq!(
        state.status,
        "Crop applied: 240×180 (from 480×360 source area)"
    );
}

#[test]
fn apply_resize_to_half() {
    let mut state = loaded_state(800, 600);
    state.resize_fields.sync(400, 300);

    ops::resize::apply_resize(&mut state).unwrap();

    let img = state.image.as_ref().unwrap();
    assert_eq!((img.current_w, img.current_h), (400, 300));
    assert_eq!(state.status, "Resize applied: 400×300 pixels");
}

#[test]
fn resize_rejects_zero_width_without_mutating() {
    let mut state = loaded_state(800, 600);
    state.resize_fields.w = "0".to_string();
    state.resize_fields.h = "300".to_string();

    let err = ops::resize::apply_resize(&mut state).unwrap_err();
    assert_eq!(err.to_string(), "Enter valid width and height (minimum 1px).");

    let img = state.image.as_ref().unwrap();
    assert_eq!((img.current_w, img.current_h), (800, 600));
}

#[test]
fn resize_rejects_targets_over_ceiling() {
    let mut state = loaded_state(800, 600);
    state.resize_fields.w = "20000".to_string();
    state.resize_fields.h = "300".to_string();

    let err = ops::resize::apply_resize(&mut state).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Maximum dimensions are 10,000px to prevent memory issues."
    );
}

#[test]
fn preset_fills_fields_and_reports() {
    let mut state = loaded_state(800, 600);
    ops::resize::apply_preset(&mut state, cropdock::app::fields::ResizePreset::Half).unwrap();
    assert_eq!(state.resize_fields.w, "400");
    assert_eq!(state.resize_fields.h, "300");
    assert_eq!(state.status, "Applied Half preset: 400×300");
}

#[test]
fn png_encode_round_trips_dimensions() {
    let image = LoadedImage::new(gradient_bitmap(64, 48));
    let bytes = ops::export::encode(&image, ExportFormat::Png, 0.92).unwrap();
    assert!(!bytes.is_empty());

    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (64, 48));
}

#[test]
fn jpeg_quality_changes_output_size() {
    let image = LoadedImage::new(gradient_bitmap(128, 128));
    let low = ops::export::encode(&image, ExportFormat::Jpeg, 0.1).unwrap();
    let high = ops::export::encode(&image, ExportFormat::Jpeg, 1.0).unwrap();
    assert!(high.len() > low.len());
}

#[test]
fn encode_resamples_to_current_dimensions() {
    let mut image = LoadedImage::new(gradient_bitmap(100, 80));
    image.current_w = 50;
    image.current_h = 40;

    let (decoded, size) = ops::export::preview(&image, ExportFormat::Png, 0.92).unwrap();
    assert!(size > 0);
    assert_eq!((decoded.width(), decoded.height()), (50, 40));
}

#[test]
fn webp_encode_produces_decodable_output() {
    let image = LoadedImage::new(gradient_bitmap(32, 32));
    let bytes = ops::export::encode(&image, ExportFormat::WebP, 0.92).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (32, 32));
}

#[cfg(not(feature = "avif"))]
#[test]
fn avif_reports_unavailable_when_not_compiled_in() {
    let image = LoadedImage::new(gradient_bitmap(16, 16));
    let err = ops::export::encode(&image, ExportFormat::Avif, 0.92).unwrap_err();
    assert!(matches!(err, EditorError::AvifUnavailable));
    assert_eq!(err.to_string(), "AVIF support is not enabled in this build.");
}

#[test]
fn dropped_non_image_path_is_rejected() {
    let err = ops::load::load_dropped(std::path::Path::new("notes.txt")).unwrap_err();
    assert!(matches!(err, EditorError::NotAnImage));
}

//! Image loading.
//!
//! Decoding is synchronous (`image::open`), so a second load can never
//! race a first one: the install in [`crate::app::state::EditorState`]
//! happens before the next event is processed.

use std::path::Path;

use image::DynamicImage;
use tracing::info;

use crate::error::{EditorError, EditorResult};

/// Extensions accepted from drag-and-drop. Anything else is rejected
/// before touching the decoder, mirroring a mime-type sniff.
const IMAGE_EXTENSIONS: [&str; 9] = [
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico",
];

/// Decode an image from disk.
pub fn load_from_path(path: &Path) -> EditorResult<DynamicImage> {
    let bitmap = image::open(path).map_err(|e| EditorError::Load(e.to_string()))?;
    info!(
        path = %path.display(),
        w = bitmap.width(),
        h = bitmap.height(),
        "decoded image"
    );
    Ok(bitmap)
}

/// Whether a dropped path looks like a raster image.
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            IMAGE_EXTENSIONS.iter().any(|known| *known == e)
        })
        .unwrap_or(false)
}

/// Decode a dropped file, rejecting non-image payloads with the
/// user-facing drop message.
pub fn load_dropped(path: &Path) -> EditorResult<DynamicImage> {
    if !is_image_path(path) {
        return Err(EditorError::NotAnImage);
    }
    load_from_path(path)
}

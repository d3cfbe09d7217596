//! Export encoding and compression preview.
//!
//! The output bitmap is the working image at its current logical
//! dimensions (resampled from natural resolution when the two differ).
//! Quality applies to the lossy formats only; the WebP encoder in this
//! stack is lossless.

use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use tracing::{debug, info};

use crate::app::state::{ExportFormat, LoadedImage};
use crate::error::{EditorError, EditorResult};

/// Encode the working image with the chosen format and quality
/// (0.0..=1.0). The returned buffer is the complete file contents.
pub fn encode(image: &LoadedImage, format: ExportFormat, quality: f32) -> EditorResult<Vec<u8>> {
    let output: Cow<'_, DynamicImage> =
        if (image.current_w, image.current_h) != (image.natural_w, image.natural_h) {
            Cow::Owned(image.bitmap.resize_exact(
                image.current_w,
                image.current_h,
                FilterType::Lanczos3,
            ))
        } else {
            Cow::Borrowed(&image.bitmap)
        };

    let mut bytes = Vec::new();
    match format {
        ExportFormat::Png => {
            output
                .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
                .map_err(|e| EditorError::Encode(e.to_string()))?;
        }
        ExportFormat::Jpeg => {
            let rgb = output.to_rgb8();
            let mut cursor = Cursor::new(&mut bytes);
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
                &mut cursor,
                quality_percent(quality),
            );
            rgb.write_with_encoder(encoder)
                .map_err(|e| EditorError::Encode(e.to_string()))?;
        }
        ExportFormat::WebP => {
            let rgba = output.to_rgba8();
            let encoder = image::codecs::webp::WebPEncoder::new_lossless(&mut bytes);
            encoder
                .encode(
                    rgba.as_raw(),
                    rgba.width(),
                    rgba.height(),
                    image::ExtendedColorType::Rgba8,
                )
                .map_err(|e| EditorError::Encode(e.to_string()))?;
        }
        ExportFormat::Avif => {
            encode_avif(&output, quality, &mut bytes)?;
        }
    }

    debug!(
        format = format.label(),
        len = bytes.len(),
        "encoded output buffer"
    );
    Ok(bytes)
}

#[cfg(feature = "avif")]
fn encode_avif(output: &DynamicImage, quality: f32, bytes: &mut Vec<u8>) -> EditorResult<()> {
    let rgba = output.to_rgba8();
    let encoder = image::codecs::avif::AvifEncoder::new_with_speed_quality(
        Cursor::new(bytes),
        4,
        quality_percent(quality),
    );
    rgba.write_with_encoder(encoder)
        .map_err(|e| EditorError::Encode(e.to_string()))
}

#[cfg(not(feature = "avif"))]
fn encode_avif(_output: &DynamicImage, _quality: f32, _bytes: &mut Vec<u8>) -> EditorResult<()> {
    Err(EditorError::AvifUnavailable)
}

/// Encode and write the export file.
pub fn export_to_file(
    image: &LoadedImage,
    format: ExportFormat,
    quality: f32,
    path: &Path,
) -> EditorResult<()> {
    let bytes = encode(image, format, quality)?;
    std::fs::write(path, &bytes)?;
    info!(path = %path.display(), len = bytes.len(), "export written");
    Ok(())
}

/// Compression preview: encode at the chosen settings, then decode the
/// result so the caller can display what the export will look like.
/// Returns the decoded preview and the encoded byte size. The encode
/// buffer is dropped once decoded.
pub fn preview(
    image: &LoadedImage,
    format: ExportFormat,
    quality: f32,
) -> EditorResult<(DynamicImage, usize)> {
    let bytes = encode(image, format, quality)?;
    let size = bytes.len();
    let decoded =
        image::load_from_memory(&bytes).map_err(|e| EditorError::Encode(e.to_string()))?;
    Ok((decoded, size))
}

/// Quality slider position to an encoder percentage.
fn quality_percent(quality: f32) -> u8 {
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

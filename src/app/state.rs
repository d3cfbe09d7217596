//! Editor state: the working image, crop session, field ports, and the
//! one-line status sink.
//!
//! Single-writer ownership per field: only the crop state machine writes
//! the crop rectangle and drag session; only the image-load path (via
//! [`EditorState::install_image`]) writes the bitmap and dimension fields.
//! Everything else reads.

use image::DynamicImage;
use tracing::{info, warn};

use crate::app::fields::{CropFields, ResizeFields};
use crate::constants::DEFAULT_EXPORT_QUALITY;
use crate::error::EditorError;
use crate::input::coords::DisplayTransform;
use crate::input::state::CropState;

/// The decoded working image plus its dimension bookkeeping.
///
/// `natural_*` are the decoded bitmap's dimensions, immutable per load.
/// `current_*` are the logical working dimensions; crop and resize output
/// resets both to the output size, so the two only drift apart inside a
/// single editing step.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub bitmap: DynamicImage,
    pub natural_w: u32,
    pub natural_h: u32,
    pub current_w: u32,
    pub current_h: u32,
}

impl LoadedImage {
    pub fn new(bitmap: DynamicImage) -> Self {
        let natural_w = bitmap.width();
        let natural_h = bitmap.height();
        Self {
            bitmap,
            natural_w,
            natural_h,
            current_w: natural_w,
            current_h: natural_h,
        }
    }

    /// Ratio from working-image space to natural-resolution source space.
    /// Uniform: aspect is preserved through every resize operation.
    pub fn scale_to_natural(&self) -> f32 {
        self.natural_w as f32 / self.current_w as f32
    }
}

/// Output encoding for export and compression preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    WebP,
    Avif,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Png,
        ExportFormat::Jpeg,
        ExportFormat::WebP,
        ExportFormat::Avif,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG",
            ExportFormat::Jpeg => "JPEG",
            ExportFormat::WebP => "WebP",
            ExportFormat::Avif => "AVIF",
        }
    }

    /// File extension, also used for the default download name.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::WebP => "webp",
            ExportFormat::Avif => "avif",
        }
    }

    /// Whether the quality slider affects this format.
    pub fn supports_quality(self) -> bool {
        !matches!(self, ExportFormat::Png)
    }
}

/// Format/quality selection for export.
#[derive(Debug, Clone, Copy)]
pub struct ExportSettings {
    pub format: ExportFormat,
    pub quality: f32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            quality: DEFAULT_EXPORT_QUALITY,
        }
    }
}

/// The whole editor state, passed explicitly into each component's entry
/// points (no process-wide globals).
pub struct EditorState {
    pub image: Option<LoadedImage>,
    /// The first user-loaded bitmap, kept so Reset can restore it.
    /// Crop/resize output does not replace it.
    pub original: Option<DynamicImage>,
    pub crop: CropState,
    pub crop_fields: CropFields,
    pub resize_fields: ResizeFields,
    pub export: ExportSettings,
    pub show_guides: bool,
    pub status: String,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            image: None,
            original: None,
            crop: CropState::default(),
            crop_fields: CropFields::default(),
            resize_fields: ResizeFields::default(),
            export: ExportSettings::default(),
            show_guides: true,
            status: "Ready. Drag and drop an image".to_string(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    /// Working dimensions of the current image, if loaded.
    pub fn current_dims(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(|i| (i.current_w, i.current_h))
    }

    /// Letterbox transform for the given canvas size; identity before the
    /// first load.
    pub fn display_transform(&self, canvas_w: f32, canvas_h: f32) -> DisplayTransform {
        match &self.image {
            Some(img) => DisplayTransform::fit(
                img.current_w as f32,
                img.current_h as f32,
                canvas_w,
                canvas_h,
            ),
            None => DisplayTransform::identity(),
        }
    }

    /// The atomic state swap after a decode completes: install `bitmap` as
    /// the new working image (natural = current = its dimensions), fully
    /// reset the crop session, and resync the resize fields.
    ///
    /// `user_load` marks loads initiated by the user (picker, drop, CLI)
    /// as opposed to crop/resize output; only user loads become the
    /// Reset target.
    pub fn install_image(&mut self, bitmap: DynamicImage, user_load: bool) {
        let loaded = LoadedImage::new(bitmap);
        info!(
            w = loaded.natural_w,
            h = loaded.natural_h,
            user_load,
            "installing working image"
        );

        if user_load {
            self.original = Some(loaded.bitmap.clone());
        }
        self.resize_fields.sync(loaded.natural_w, loaded.natural_h);
        self.status = format!("Loaded {}×{}", loaded.natural_w, loaded.natural_h);
        self.image = Some(loaded);
        self.crop.reset(true);
    }

    /// Restore the first user-loaded bitmap.
    pub fn reset_to_original(&mut self) {
        let Some(original) = self.original.clone() else {
            return;
        };
        if !self.is_loaded() {
            return;
        }
        self.install_image(original, false);
        self.status = "Image has been reset to original.".to_string();
    }

    /// Toggle crop mode. Entering seeds the default rectangle (or revives
    /// a dormant one) and pushes its size to the crop fields.
    pub fn toggle_crop_mode(&mut self) {
        let Some((w, h)) = self.current_dims() else {
            self.report(&EditorError::NoImage);
            return;
        };
        if self.crop.is_active() {
            self.crop.exit();
        } else {
            self.crop.enter(w as f32, h as f32);
            if let Some(rect) = self.crop.rect() {
                self.crop_fields.sync(&rect);
            }
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
    }

    /// Report a failed operation: status line only, no state mutation.
    pub fn report(&mut self, err: &EditorError) {
        warn!(%err, "operation rejected");
        self.status = err.to_string();
    }
}

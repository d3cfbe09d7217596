//! Error types for editor operations.
//!
//! Every operation validates its preconditions synchronously and, on
//! violation, reports one of these errors and performs no mutation. The
//! `Display` strings are the user-facing status messages; no structured
//! error codes cross the status boundary.

use thiserror::Error;

/// Errors that can occur during load, crop, resize, and export operations.
#[derive(Error, Debug)]
pub enum EditorError {
    /// An operation was attempted before any image finished loading.
    #[error("Load an image first.")]
    NoImage,

    /// Crop commit requested with no active rectangle (or no image).
    #[error("Cannot apply crop: no crop area or image loaded")]
    NoCropSelection,

    /// Resize target is non-numeric or below 1px.
    #[error("Enter valid width and height (minimum 1px).")]
    InvalidDimensions,

    /// Resize target exceeds the safety ceiling.
    #[error("Maximum dimensions are 10,000px to prevent memory issues.")]
    DimensionLimit,

    /// A dropped file is not a decodable raster image.
    #[error("Please drop an image file.")]
    NotAnImage,

    /// Image decode failed.
    #[error("Failed to load image: {0}")]
    Load(String),

    /// Surface-to-bytes encoding produced nothing.
    #[error("Failed to generate file: {0}")]
    Encode(String),

    /// AVIF was requested but the codec is not compiled in.
    #[error("AVIF support is not enabled in this build.")]
    AvifUnavailable,

    /// IO error writing the exported file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

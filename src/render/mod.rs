//! Rendering of the crop overlay.
//!
//! The overlay is expressed as backend-agnostic draw commands; the egui
//! layer in [`crate::app`] replays them each frame.

pub mod overlay;

pub use overlay::{DrawCmd, Rgba, even_odd_surround, overlay_commands};

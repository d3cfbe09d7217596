//! cropdock: a side-panel image editor built around an interactive crop
//! rectangle.
//!
//! The core is GUI-free: coordinate mapping ([`input::coords`]), the crop
//! session state machine ([`input::state`]), hit-testing
//! ([`input::hit_test`]), pointer edit rules ([`input::drag`]), overlay
//! draw-command generation ([`render`]), and the image operations
//! ([`ops`]). The eframe shell in [`app`] only wires widgets and replays
//! draw commands.

pub mod app;
pub mod constants;
pub mod error;
pub mod input;
pub mod ops;
pub mod render;
pub mod types;

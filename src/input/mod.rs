//! Pointer input handling for the crop canvas.
//!
//! The crop engine uses an explicit state machine ([`CropState`]) instead
//! of scattered flags, so a captured drag without a rectangle cannot be
//! represented.
//!
//! ## Modules
//!
//! - `coords` - image-space/canvas-space letterbox transform
//! - `state` - crop state machine and drag session types
//! - `hit_test` - handle hit-testing and hover cursor resolution
//! - `drag` - pointer handlers and per-handle edit rules

pub mod coords;
pub mod drag;
pub mod state;

pub use coords::DisplayTransform;
pub use state::{CropState, DragMode, DragSession};

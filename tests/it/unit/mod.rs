//! Single-component tests that need real decoded bitmaps.

mod ops_tests;
mod overlay_tests;
mod snapshot_tests;

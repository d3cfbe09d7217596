//! Single test binary entry point.
//!
//! All integration-level tests link into one binary:
//! - unit: single-component tests that need real decoded bitmaps
//! - integration: multi-component editing workflows

mod helpers;
mod integration;
mod unit;

//! Multi-component editing workflow tests.

mod crop_workflow_tests;
mod editing_session_tests;

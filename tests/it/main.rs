//! Single test binary entry point.
//!
//! Structure:
//! - helpers: Document builder and a command-recording model
//! - integration: Multi-gesture workflows
//! - unit: Single-component tests against the public API

//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests that drive the full TUI against a scripted
//! registry.

//! Integration tests for the FlowDB shell binary.
//!
//! Run with: `cargo test --test integration_tests`

mod shell;

//! FlowDB shell - command parsing and dispatch for an interactive FlowDB client.
//!
//! This library exposes the core modules for use by the binary and in
//! integration tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod repl;

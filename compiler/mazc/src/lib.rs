//! Maz driver library.
//!
//! The `mazc` binary is a thin argument parser over the command handlers
//! in [`commands`]. They live in the library so integration tests can call
//! the same functions the binary does.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;

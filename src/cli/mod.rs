//! Command-line interface.

pub mod args;
pub mod commands;

// Re-exports
pub use args::{Cli, Commands};
pub use commands::dispatch;

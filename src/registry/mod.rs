//! Module registry for Outfitter.
//!
//! The registry owns the set of known module manifests and supports three
//! registration paths:
//! - Built-in modules (embedded in the binary)
//! - Programmatic registration via [`Registry::register`]
//! - Best-effort discovery from an external definitions directory
//!
//! # Example
//!
//! ```
//! use outfitter::registry::Registry;
//!
//! let registry = Registry::with_builtins().unwrap();
//! assert!(registry.has("core"));
//! ```

pub mod builtin;
pub mod loader;
pub mod manifest;
pub mod store;

// Re-exports
pub use manifest::{Contributions, EnabledWhen, ModuleManifest, ProjectContext, Provider, Route};
pub use store::Registry;

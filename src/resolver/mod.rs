//! Module selection resolution.
//!
//! Turns a requested set of module ids into a safe, ordered activation
//! plan: seeds the selection with always-included modules, expands the
//! transitive requirement closure, rejects cycles and conflicts, and
//! produces a deterministic topological order.
//!
//! # Example
//!
//! ```
//! use outfitter::registry::Registry;
//! use outfitter::resolver::resolve;
//!
//! let registry = Registry::with_builtins().unwrap();
//! let plan = resolve(&registry, &["auth"]).unwrap();
//! assert_eq!(plan.ids(), vec!["core", "api_client", "auth"]);
//! ```

pub mod graph;
pub mod resolved;

// Re-exports
pub use graph::ModuleGraph;
pub use resolved::{resolve, ResolvedSet};

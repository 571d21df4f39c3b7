//! Outfitter - Feature-module resolution and composition for scaffolded
//! app projects.
//!
//! Outfitter manages optional feature modules (auth, API client, database,
//! theming, ...) that compose into a generated application project. Given a
//! requested selection it determines the complete, valid set of modules to
//! activate, orders them deterministically, and merges their contributed
//! artifacts into a single conflict-free result.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`composer`] - Contribution merging, version arbitration, and output
//!   formatting
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Module manifests, registration, and discovery
//! - [`resolver`] - Dependency resolution and deterministic ordering
//!
//! # Example
//!
//! ```
//! use outfitter::composer::compose;
//! use outfitter::registry::{ProjectContext, Registry};
//! use outfitter::resolver::resolve;
//!
//! let registry = Registry::with_builtins().unwrap();
//! let plan = resolve(&registry, &["auth"]).unwrap();
//! assert_eq!(plan.ids(), vec!["core", "api_client", "auth"]);
//!
//! let result = compose(&plan, &ProjectContext::new());
//! assert!(result.dependencies.contains_key("dio"));
//! ```

pub mod cli;
pub mod composer;
pub mod error;
pub mod registry;
pub mod resolver;

pub use error::{OutfitterError, Result};

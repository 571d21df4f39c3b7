//! Contribution composition.
//!
//! Merges each active module's contributions into unified, deduplicated
//! collections: dependency maps with version arbitration, providers
//! deduplicated by import path, routes in module order, and environment
//! variables as an ordered set. The [`CompositionResult`] plus the two
//! formatting helpers are the sole contract with external scaffolding.

pub mod compose;
pub mod format;
pub mod version;

// Re-exports
pub use compose::{compose, CompositionResult};
pub use format::{format_pubspec_dependencies, generate_app_providers_barrel};
pub use version::pick_newer_version;

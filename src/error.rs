//! Error types for Outfitter operations.
//!
//! This module defines [`OutfitterError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `OutfitterError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `OutfitterError::Other`) for unexpected errors
//! - Resolution errors are fatal to the call that raised them; callers surface
//!   the message verbatim

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Outfitter operations.
#[derive(Debug, Error)]
pub enum OutfitterError {
    /// Registry lookup on an unregistered module id.
    #[error("Module not registered: {id}")]
    NotRegistered { id: String },

    /// A requested module id is absent from the registry during resolution.
    #[error("Unknown module: {id}")]
    ModuleNotFound { id: String },

    /// A manifest's `requires` entry is absent from the registry.
    #[error("Module '{module}' requires unknown module '{dependency}'")]
    MissingDependency { module: String, dependency: String },

    /// Module dependency cycle detected.
    #[error("Circular dependency detected: {cycle}")]
    CircularDependency { cycle: String },

    /// Two active modules are incompatible.
    #[error("Module '{module}' conflicts with '{other}'")]
    ModuleConflict { module: String, other: String },

    /// Failed to parse a module manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Outfitter operations.
pub type Result<T> = std::result::Result<T, OutfitterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_registered_displays_id() {
        let err = OutfitterError::NotRegistered { id: "auth".into() };
        assert_eq!(err.to_string(), "Module not registered: auth");
    }

    #[test]
    fn module_not_found_displays_id() {
        let err = OutfitterError::ModuleNotFound {
            id: "nonexistent".into(),
        };
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn missing_dependency_names_both_sides() {
        let err = OutfitterError::MissingDependency {
            module: "auth".into(),
            dependency: "api_client".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("auth"));
        assert!(msg.contains("api_client"));
    }

    #[test]
    fn circular_dependency_displays_cycle() {
        let err = OutfitterError::CircularDependency {
            cycle: "a -> b -> a".into(),
        };
        assert!(err.to_string().contains("a -> b -> a"));
    }

    #[test]
    fn module_conflict_message_format() {
        let err = OutfitterError::ModuleConflict {
            module: "firebase_backend".into(),
            other: "supabase_backend".into(),
        };
        assert_eq!(
            err.to_string(),
            "Module 'firebase_backend' conflicts with 'supabase_backend'"
        );
    }

    #[test]
    fn manifest_parse_displays_path_and_message() {
        let err = OutfitterError::ManifestParse {
            path: PathBuf::from("/modules/auth/module.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/modules/auth/module.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: OutfitterError = io_err.into();
        assert!(matches!(err, OutfitterError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(OutfitterError::ModuleNotFound { id: "test".into() })
        }
        assert!(returns_error().is_err());
    }
}

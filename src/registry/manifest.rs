//! Module manifest definitions.
//!
//! A manifest is the static declaration of a feature module: its identity,
//! dependency and conflict edges, and the contributions it makes to a
//! scaffolded project. Manifests are plain data; they carry no behavior
//! beyond the declarative [`EnabledWhen`] condition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static declaration of a feature module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleManifest {
    /// Unique slug, stable identity within a registry.
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Module ids this module depends on.
    #[serde(default)]
    pub requires: Vec<String>,

    /// Module ids incompatible with this one. The check is directional:
    /// a declaration on one side is sufficient.
    #[serde(default)]
    pub conflicts_with: Vec<String>,

    /// True for modules implicitly part of every resolution.
    #[serde(default)]
    pub always_included: bool,

    /// Opaque reference handed to external template renderers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<String>,

    /// Artifacts this module adds to the composed project.
    #[serde(default)]
    pub contributions: Contributions,

    /// Optional condition gating this module's contributions. A module whose
    /// condition evaluates false stays in the dependency graph but
    /// contributes nothing.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_yaml::with::singleton_map"
    )]
    pub enabled_when: Option<EnabledWhen>,
}

impl ModuleManifest {
    /// Create a minimal manifest with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: String::new(),
            requires: Vec::new(),
            conflicts_with: Vec::new(),
            always_included: false,
            template_dir: None,
            contributions: Contributions::default(),
            enabled_when: None,
        }
    }

    /// Whether this module contributes for the given project context.
    pub fn is_enabled(&self, context: &ProjectContext) -> bool {
        match &self.enabled_when {
            Some(condition) => condition.evaluate(context),
            None => true,
        }
    }
}

/// Artifacts a module contributes to the composed result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contributions {
    /// Package dependencies (name to version requirement).
    #[serde(default)]
    pub pubspec_dependencies: BTreeMap<String, String>,

    /// Development-only package dependencies.
    #[serde(default)]
    pub pubspec_dev_dependencies: BTreeMap<String, String>,

    /// Generated-code provider references.
    #[serde(default)]
    pub providers: Vec<Provider>,

    /// Route declarations.
    #[serde(default)]
    pub routes: Vec<Route>,

    /// Required environment variable names.
    #[serde(default)]
    pub env_vars: Vec<String>,
}

/// A generated-code provider reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub import_path: String,
}

/// A route declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    pub name: String,
    pub import_path: String,
}

/// Declarative condition gating a module's contributions.
///
/// Replaces an arbitrary per-module predicate so manifests stay plain data:
/// the condition names a project-context flag instead of carrying a closure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnabledWhen {
    /// Enabled when the named context flag is set.
    Flag(String),
    /// Enabled unless the named context flag is set.
    NotFlag(String),
}

impl EnabledWhen {
    /// Evaluate the condition against a project context.
    pub fn evaluate(&self, context: &ProjectContext) -> bool {
        match self {
            EnabledWhen::Flag(name) => context.flag(name),
            EnabledWhen::NotFlag(name) => !context.flag(name),
        }
    }
}

/// Caller-supplied context describing the project being scaffolded.
///
/// The core only reads the flags that `enabled_when` conditions name;
/// everything else about the target project is opaque to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectContext {
    /// Boolean feature flags, keyed by name. Unset flags read as false.
    #[serde(default)]
    pub flags: BTreeMap<String, bool>,
}

impl ProjectContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style flag setter.
    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.flags.insert(name.into(), value);
        self
    }

    /// Read a flag; unset flags are false.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}

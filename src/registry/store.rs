//! In-memory module registry.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{OutfitterError, Result};
use crate::registry::loader;
use crate::registry::manifest::ModuleManifest;

/// Holds the set of known module manifests.
///
/// Registration is last-write-wins by id, so re-registering a module
/// silently replaces the prior manifest. Enumeration follows first
/// registration order, which callers rely on for UI listings.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    modules: HashMap<String, ModuleManifest>,
    order: Vec<String>,
    loaded: bool,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the built-in module definitions.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for manifest in crate::registry::builtin::load_manifests()? {
            registry.register(manifest);
        }
        Ok(registry)
    }

    /// Insert or overwrite a manifest by id.
    ///
    /// On overwrite the module keeps its original position in enumeration
    /// order.
    pub fn register(&mut self, manifest: ModuleManifest) {
        if !self.modules.contains_key(&manifest.id) {
            self.order.push(manifest.id.clone());
        }
        self.modules.insert(manifest.id.clone(), manifest);
    }

    /// Get a manifest by id.
    pub fn get(&self, id: &str) -> Result<&ModuleManifest> {
        self.modules
            .get(id)
            .ok_or_else(|| OutfitterError::NotRegistered { id: id.to_string() })
    }

    /// Check if a module is registered.
    pub fn has(&self, id: &str) -> bool {
        self.modules.contains_key(id)
    }

    /// All manifests, in first-registration order.
    pub fn all(&self) -> Vec<&ModuleManifest> {
        self.order
            .iter()
            .filter_map(|id| self.modules.get(id))
            .collect()
    }

    /// Manifests with `always_included` set, in registration order.
    pub fn always_included(&self) -> Vec<&ModuleManifest> {
        self.all()
            .into_iter()
            .filter(|m| m.always_included)
            .collect()
    }

    /// Manifests without `always_included`, in registration order.
    pub fn optional(&self) -> Vec<&ModuleManifest> {
        self.all()
            .into_iter()
            .filter(|m| !m.always_included)
            .collect()
    }

    /// Ids of optional modules, in registration order.
    pub fn optional_ids(&self) -> Vec<&str> {
        self.optional().into_iter().map(|m| m.id.as_str()).collect()
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry holds no modules.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether a discovery pass has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Best-effort discovery from a module definitions directory.
    ///
    /// Each immediate child directory containing a parseable `module.yml`
    /// (or `module.yaml`) registers one module. Malformed entries are
    /// skipped, never escalated: one broken third-party module directory
    /// must not prevent the tool from operating on the valid ones. A
    /// missing directory leaves the registry unchanged.
    ///
    /// Returns the number of modules registered.
    pub fn load_dir(&mut self, dir: &Path) -> usize {
        let manifests = loader::discover(dir);
        let count = manifests.len();
        for manifest in manifests {
            self.register(manifest);
        }
        self.loaded = true;
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::manifest::ModuleManifest;

    fn module(id: &str) -> ModuleManifest {
        ModuleManifest::new(id)
    }

    fn always(id: &str) -> ModuleManifest {
        let mut m = ModuleManifest::new(id);
        m.always_included = true;
        m
    }

    #[test]
    fn register_and_get() {
        let mut registry = Registry::new();
        registry.register(module("auth"));

        assert!(registry.has("auth"));
        assert_eq!(registry.get("auth").unwrap().id, "auth");
    }

    #[test]
    fn get_unregistered_fails() {
        let registry = Registry::new();
        let result = registry.get("nonexistent");
        assert!(matches!(
            result,
            Err(OutfitterError::NotRegistered { .. })
        ));
    }

    #[test]
    fn register_overwrites_by_id() {
        let mut registry = Registry::new();
        registry.register(module("auth"));

        let mut replacement = module("auth");
        replacement.description = "replaced".to_string();
        registry.register(replacement);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("auth").unwrap().description, "replaced");
    }

    #[test]
    fn overwrite_keeps_enumeration_position() {
        let mut registry = Registry::new();
        registry.register(module("a"));
        registry.register(module("b"));
        registry.register(module("a"));

        let ids: Vec<_> = registry.all().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn all_preserves_registration_order() {
        let mut registry = Registry::new();
        registry.register(module("zebra"));
        registry.register(module("apple"));
        registry.register(module("mango"));

        let ids: Vec<_> = registry.all().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn partitions_by_always_included() {
        let mut registry = Registry::new();
        registry.register(always("core"));
        registry.register(module("auth"));
        registry.register(module("theming"));

        let always_ids: Vec<_> = registry
            .always_included()
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(always_ids, vec!["core"]);
        assert_eq!(registry.optional_ids(), vec!["auth", "theming"]);
    }

    #[test]
    fn empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(!registry.is_loaded());
    }

    #[test]
    fn with_builtins_includes_core() {
        let registry = Registry::with_builtins().unwrap();
        assert!(registry.has("core"));
        assert!(registry.get("core").unwrap().always_included);
    }
}

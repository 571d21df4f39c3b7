//! Selection resolution into an ordered activation plan.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{OutfitterError, Result};
use crate::registry::{ModuleManifest, Registry};
use crate::resolver::graph::ModuleGraph;

/// An immutable, topologically ordered module activation plan.
///
/// Produced by one [`resolve`] call and discarded after use. Requirements
/// always precede their dependents, and each module appears exactly once.
#[derive(Debug, Clone)]
pub struct ResolvedSet {
    modules: Vec<ModuleManifest>,
}

impl ResolvedSet {
    /// Module ids in activation order.
    pub fn ids(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.id.as_str()).collect()
    }

    /// Iterate manifests in activation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ModuleManifest> {
        self.modules.iter()
    }

    /// Manifests in activation order.
    pub fn as_slice(&self) -> &[ModuleManifest] {
        &self.modules
    }

    /// Number of active modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResolvedSet {
    type Item = &'a ModuleManifest;
    type IntoIter = std::slice::Iter<'a, ModuleManifest>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Turn a requested module selection into a validated activation plan.
///
/// The selection is seeded with every `always_included` module, expanded
/// to its transitive requirements, checked for cycles and conflicts, and
/// ordered deterministically. Any validation failure aborts the whole
/// call; no partial plan is ever returned.
pub fn resolve<S: AsRef<str>>(registry: &Registry, selection: &[S]) -> Result<ResolvedSet> {
    // Seed set: always-included modules first, then the request. Duplicate
    // requests collapse to a single activation.
    let mut seeds: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for manifest in registry.always_included() {
        if seen.insert(manifest.id.clone()) {
            seeds.push(manifest.id.clone());
        }
    }
    for id in selection {
        let id = id.as_ref();
        if !registry.has(id) {
            return Err(OutfitterError::ModuleNotFound { id: id.to_string() });
        }
        if seen.insert(id.to_string()) {
            seeds.push(id.to_string());
        }
    }

    // Transitive closure over `requires`.
    let mut active: Vec<String> = Vec::new();
    let mut queue: Vec<String> = seeds;
    let mut visited: HashSet<String> = HashSet::new();
    while let Some(id) = queue.pop() {
        if !visited.insert(id.clone()) {
            continue;
        }
        let manifest = registry.get(&id)?;
        for dep in &manifest.requires {
            if !registry.has(dep) {
                return Err(OutfitterError::MissingDependency {
                    module: id.clone(),
                    dependency: dep.clone(),
                });
            }
            queue.push(dep.clone());
        }
        active.push(id);
    }

    // Cycle detection and deterministic ordering.
    let mut graph = ModuleGraph::new();
    for id in &active {
        let manifest = registry.get(id)?;
        graph.add_module(id.clone(), manifest.requires.clone());
    }
    let order = graph.topological_order()?;

    let modules: Vec<ModuleManifest> = order
        .iter()
        .map(|id| registry.get(id).cloned())
        .collect::<Result<_>>()?;

    // Conflict check over the finalized active set. Directional: a
    // declaration on either side triggers.
    let active_ids: HashSet<&str> = order.iter().map(|id| id.as_str()).collect();
    for manifest in &modules {
        for other in &manifest.conflicts_with {
            if other != &manifest.id && active_ids.contains(other.as_str()) {
                return Err(OutfitterError::ModuleConflict {
                    module: manifest.id.clone(),
                    other: other.clone(),
                });
            }
        }
    }

    debug!("Resolved {} module(s): {}", modules.len(), order.join(", "));

    Ok(ResolvedSet { modules })
}

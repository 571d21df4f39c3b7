//! Contribution merging over a resolved module list.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::composer::version::pick_newer_version;
use crate::registry::{ProjectContext, Provider, Route};
use crate::resolver::ResolvedSet;

/// Immutable snapshot of all active modules' merged contributions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompositionResult {
    /// Package dependencies, version-arbitrated on name collision.
    pub dependencies: BTreeMap<String, String>,

    /// Development-only package dependencies, same arbitration.
    pub dev_dependencies: BTreeMap<String, String>,

    /// Provider references, deduplicated by import path (first wins).
    pub providers: Vec<Provider>,

    /// Route declarations, in module order, never deduplicated.
    pub routes: Vec<Route>,

    /// Required environment variables, deduplicated, first-occurrence order.
    pub env_vars: Vec<String>,
}

/// Merge contributions from an already-resolved, ordered module list.
///
/// Modules whose `enabled_when` condition evaluates false for the context
/// are skipped entirely: they stay in the dependency graph but contribute
/// nothing.
pub fn compose(modules: &ResolvedSet, context: &ProjectContext) -> CompositionResult {
    let mut result = CompositionResult::default();
    let mut provider_paths: HashSet<String> = HashSet::new();
    let mut env_seen: HashSet<String> = HashSet::new();

    for manifest in modules {
        if !manifest.is_enabled(context) {
            debug!("Module '{}' disabled for this project, skipping", manifest.id);
            continue;
        }

        let contributions = &manifest.contributions;

        for (name, version) in &contributions.pubspec_dependencies {
            merge_dependency(&mut result.dependencies, name, version);
        }
        for (name, version) in &contributions.pubspec_dev_dependencies {
            merge_dependency(&mut result.dev_dependencies, name, version);
        }

        for provider in &contributions.providers {
            if provider_paths.insert(provider.import_path.clone()) {
                result.providers.push(provider.clone());
            }
        }

        result.routes.extend(contributions.routes.iter().cloned());

        for var in &contributions.env_vars {
            if env_seen.insert(var.clone()) {
                result.env_vars.push(var.clone());
            }
        }
    }

    result
}

/// Record a dependency, arbitrating versions on name collision.
///
/// Arbitration is commutative: the outcome does not depend on which
/// module's declaration was processed first.
fn merge_dependency(map: &mut BTreeMap<String, String>, name: &str, version: &str) {
    match map.get(name) {
        Some(existing) => {
            let winner = pick_newer_version(existing, version).to_string();
            map.insert(name.to_string(), winner);
        }
        None => {
            map.insert(name.to_string(), version.to_string());
        }
    }
}

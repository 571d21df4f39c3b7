//! External module discovery from a definitions directory.
//!
//! Discovery is best-effort: any entry that is not a directory, has no
//! manifest file, or fails to parse is skipped with a debug log rather
//! than aborting the scan.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::registry::manifest::ModuleManifest;

/// Manifest file names searched within each candidate directory.
const MANIFEST_NAMES: &[&str] = &["module.yml", "module.yaml"];

/// Scan a definitions directory for module manifests.
///
/// Each immediate child directory is a candidate; a candidate yields a
/// module when it contains a parseable manifest file. A missing or
/// unreadable directory yields no modules.
pub fn discover(dir: &Path) -> Vec<ModuleManifest> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Skipping module discovery in {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut manifests = Vec::new();
    let mut paths: Vec<_> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
    // Directory listing order is platform-dependent; sort for stable
    // registration order.
    paths.sort();

    for path in paths {
        if !path.is_dir() {
            debug!("Skipping non-directory entry {}", path.display());
            continue;
        }
        match load_candidate(&path) {
            Some(manifest) => manifests.push(manifest),
            None => debug!("No usable manifest in {}", path.display()),
        }
    }

    manifests
}

fn load_candidate(dir: &Path) -> Option<ModuleManifest> {
    for name in MANIFEST_NAMES {
        let manifest_path = dir.join(name);
        if !manifest_path.is_file() {
            continue;
        }

        let content = match fs::read_to_string(&manifest_path) {
            Ok(content) => content,
            Err(e) => {
                debug!("Skipping unreadable {}: {}", manifest_path.display(), e);
                return None;
            }
        };

        match serde_yaml::from_str::<ModuleManifest>(&content) {
            Ok(manifest) => return Some(manifest),
            Err(e) => {
                debug!("Skipping malformed {}: {}", manifest_path.display(), e);
                return None;
            }
        }
    }

    None
}

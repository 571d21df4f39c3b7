//! Built-in module definitions embedded at compile time.
//!
//! Unlike external discovery, built-ins are first-party: a manifest that
//! fails to parse here is a packaging bug and surfaces as an error.

use include_dir::{include_dir, Dir};

use crate::error::{OutfitterError, Result};
use crate::registry::manifest::ModuleManifest;

/// Embedded module definitions directory.
static MODULES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/modules");

/// Load all built-in module manifests.
pub fn load_manifests() -> Result<Vec<ModuleManifest>> {
    let mut manifests = Vec::new();

    for entry in MODULES_DIR.dirs() {
        let Some(file) = entry
            .get_file(entry.path().join("module.yml"))
            .or_else(|| entry.get_file(entry.path().join("module.yaml")))
        else {
            continue;
        };

        let content = file
            .contents_utf8()
            .ok_or_else(|| OutfitterError::ManifestParse {
                path: file.path().to_path_buf(),
                message: "Invalid UTF-8".to_string(),
            })?;

        let manifest: ModuleManifest =
            serde_yaml::from_str(content).map_err(|e| OutfitterError::ManifestParse {
                path: file.path().to_path_buf(),
                message: e.to_string(),
            })?;
        manifests.push(manifest);
    }

    // Embedded directory order is unspecified; register alphabetically.
    manifests.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(manifests)
}

/// Check if a module id exists among the built-ins.
pub fn has_module(id: &str) -> bool {
    load_manifests()
        .map(|m| m.iter().any(|manifest| manifest.id == id))
        .unwrap_or(false)
}

//! Text output helpers consumed by external scaffolding.
//!
//! These operate only on composed data. Their exact output is a contract:
//! external renderers splice the strings into generated files verbatim.

use std::collections::BTreeMap;

use crate::registry::Provider;

/// The router barrel export every generated app starts from.
const ROUTER_EXPORT_PATH: &str = "app_router.dart";

/// Render a dependency map as pubspec entries.
///
/// One `"  name: version"` line per entry, sorted alphabetically by name,
/// joined with newlines and without a trailing newline. An empty map
/// renders as an empty string.
pub fn format_pubspec_dependencies(dependencies: &BTreeMap<String, String>) -> String {
    dependencies
        .iter()
        .map(|(name, version)| format!("  {}: {}", name, version))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the generated provider barrel file.
///
/// Emits the fixed router export first, then one export line per unique
/// provider import path. A provider that names the router's own path is
/// not exported twice. Always ends with exactly one trailing newline.
pub fn generate_app_providers_barrel(providers: &[Provider]) -> String {
    let mut output = String::new();
    output.push_str(&export_line(ROUTER_EXPORT_PATH));

    let mut seen = vec![ROUTER_EXPORT_PATH.to_string()];
    for provider in providers {
        if seen.contains(&provider.import_path) {
            continue;
        }
        seen.push(provider.import_path.clone());
        output.push_str(&export_line(&provider.import_path));
    }

    output
}

fn export_line(path: &str) -> String {
    format!("export '{}';\n", path)
}

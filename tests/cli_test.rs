//! Integration tests for CLI argument parsing and command output.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn outfitter() -> Command {
    Command::new(cargo_bin("outfitter"))
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    outfitter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Feature-module resolution"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    outfitter()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn list_shows_builtin_modules() -> Result<(), Box<dyn std::error::Error>> {
    outfitter()
        .args(["list", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("core"))
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("Always included:"));
    Ok(())
}

#[test]
fn resolve_prints_activation_order() -> Result<(), Box<dyn std::error::Error>> {
    let output = outfitter()
        .args(["resolve", "auth", "--no-color"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output)?;
    let core = stdout.find("core").unwrap();
    let api_client = stdout.find("api_client").unwrap();
    let auth_idx = stdout.find("auth").unwrap();
    assert!(core < api_client);
    assert!(api_client < auth_idx);
    Ok(())
}

#[test]
fn resolve_unknown_module_fails() -> Result<(), Box<dyn std::error::Error>> {
    outfitter()
        .args(["resolve", "nonexistent"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown module: nonexistent"));
    Ok(())
}

#[test]
fn resolve_conflicting_backends_fails_with_exact_message() -> Result<(), Box<dyn std::error::Error>>
{
    outfitter()
        .args(["resolve", "firebase_backend", "supabase_backend"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Module 'firebase_backend' conflicts with 'supabase_backend'",
        ));
    Ok(())
}

#[test]
fn compose_json_output_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let output = outfitter()
        .args(["compose", "auth", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let result: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(result["dependencies"]["json_annotation"], "^4.9.0");
    assert_eq!(result["dependencies"]["dio"], "^5.4.0");
    assert!(result["env_vars"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("API_BASE_URL")));
    Ok(())
}

#[test]
fn compose_plain_output_includes_sections() -> Result<(), Box<dyn std::error::Error>> {
    outfitter()
        .args(["compose", "theming", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dependencies:"))
        .stdout(predicate::str::contains("  google_fonts: ^6.2.1"))
        .stdout(predicate::str::contains("export 'app_router.dart';"));
    Ok(())
}

#[test]
fn compose_flag_disables_conditional_module() -> Result<(), Box<dyn std::error::Error>> {
    outfitter()
        .args([
            "compose",
            "push_notifications",
            "--flag",
            "offline_only",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("firebase_messaging").not());
    Ok(())
}

#[test]
fn modules_dir_extends_registry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("analytics");
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join("module.yml"),
        "id: analytics\ndescription: \"Usage analytics\"\nrequires: [core]\n",
    )?;

    outfitter()
        .args(["resolve", "analytics", "--no-color"])
        .arg("--modules-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("analytics"));
    Ok(())
}

#[test]
fn malformed_external_module_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("broken");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("module.yml"), "id: [not, a, string]\n")?;

    outfitter()
        .args(["list", "--no-color"])
        .arg("--modules-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("broken").not());
    Ok(())
}

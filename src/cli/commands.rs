//! Command implementations.

use console::style;
use tracing::debug;

use crate::cli::args::{Cli, Commands, ComposeArgs, ListArgs, ResolveArgs};
use crate::composer::{compose, format_pubspec_dependencies, generate_app_providers_barrel};
use crate::error::Result;
use crate::registry::{ProjectContext, Registry};
use crate::resolver::resolve;

/// Dispatch the parsed CLI to its command implementation.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let registry = build_registry(cli)?;

    match &cli.command {
        Commands::List(args) => run_list(&registry, args),
        Commands::Resolve(args) => run_resolve(&registry, args),
        Commands::Compose(args) => run_compose(&registry, args),
    }
}

/// Build the registry: built-ins plus any external definitions directory.
fn build_registry(cli: &Cli) -> Result<Registry> {
    let mut registry = Registry::with_builtins()?;
    if let Some(dir) = &cli.modules_dir {
        let count = registry.load_dir(dir);
        debug!("Discovered {} external module(s) in {}", count, dir.display());
    }
    Ok(registry)
}

fn run_list(registry: &Registry, args: &ListArgs) -> Result<()> {
    if !args.optional_only {
        println!("{}", style("Always included:").bold());
        for manifest in registry.always_included() {
            println!(
                "  {}  {}",
                style(&manifest.id).cyan(),
                style(&manifest.description).dim()
            );
        }
        println!();
    }

    println!("{}", style("Optional:").bold());
    for manifest in registry.optional() {
        println!(
            "  {}  {}",
            style(&manifest.id).cyan(),
            style(&manifest.description).dim()
        );
        if !manifest.requires.is_empty() {
            println!(
                "      {} {}",
                style("requires:").dim(),
                style(manifest.requires.join(", ")).dim()
            );
        }
    }

    Ok(())
}

fn run_resolve(registry: &Registry, args: &ResolveArgs) -> Result<()> {
    let plan = resolve(registry, &args.modules)?;

    println!("{}", style("Activation order:").bold());
    for (index, id) in plan.ids().iter().enumerate() {
        println!("  {} {}", style(format!("{}.", index + 1)).dim(), id);
    }

    Ok(())
}

fn run_compose(registry: &Registry, args: &ComposeArgs) -> Result<()> {
    let plan = resolve(registry, &args.modules)?;
    let context = parse_context(&args.flags);
    let result = compose(&plan, &context);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).map_err(anyhow::Error::from)?
        );
        return Ok(());
    }

    println!("{}", style("dependencies:").bold());
    println!("{}", format_pubspec_dependencies(&result.dependencies));
    println!();
    println!("{}", style("dev_dependencies:").bold());
    println!("{}", format_pubspec_dependencies(&result.dev_dependencies));
    println!();
    println!("{}", style("app_providers.dart:").bold());
    print!("{}", generate_app_providers_barrel(&result.providers));
    println!();
    println!("{}", style("routes:").bold());
    for route in &result.routes {
        println!("  {}  {}  {}", route.path, route.name, route.import_path);
    }
    println!();
    println!("{}", style("env:").bold());
    for var in &result.env_vars {
        println!("  {}", var);
    }

    Ok(())
}

/// Parse `--flag name` / `--flag name=false` arguments into a context.
fn parse_context(flags: &[String]) -> ProjectContext {
    let mut context = ProjectContext::new();
    for flag in flags {
        let (name, value) = match flag.split_once('=') {
            Some((name, value)) => (name, value.trim().eq_ignore_ascii_case("true")),
            None => (flag.as_str(), true),
        };
        context.flags.insert(name.trim().to_string(), value);
    }
    context
}

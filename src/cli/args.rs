//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Outfitter - Feature-module resolution for scaffolded app projects.
#[derive(Debug, Parser)]
#[command(name = "outfitter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Additional module definitions directory to discover
    #[arg(short, long, global = true, env = "OUTFITTER_MODULES_DIR")]
    pub modules_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available modules
    List(ListArgs),

    /// Resolve a module selection into an activation order
    Resolve(ResolveArgs),

    /// Compose the contributions of a resolved selection
    Compose(ComposeArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Show only optional modules
    #[arg(long)]
    pub optional_only: bool,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Module ids to activate
    pub modules: Vec<String>,
}

/// Arguments for the `compose` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ComposeArgs {
    /// Module ids to activate
    pub modules: Vec<String>,

    /// Project context flags (name or name=false, repeatable)
    #[arg(long = "flag", value_name = "NAME[=BOOL]")]
    pub flags: Vec<String>,

    /// Emit the composition result as JSON
    #[arg(long)]
    pub json: bool,
}

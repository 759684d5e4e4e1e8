//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Flutter Takeoff - Simplify your Flutter development setup.
#[derive(Debug, Parser)]
#[command(name = "takeoff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.takeoff/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive main menu (default if no command specified)
    Menu,

    /// Verify installed prerequisites
    Check(CheckArgs),

    /// Download and set up Flutter
    Install(InstallArgs),

    /// Diagnose the Flutter installation with `flutter doctor -v`
    Doctor,

    /// Show version and build information
    Version(VersionArgs),

    /// Browse for a directory and print the chosen path
    Pick(PickArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Installation directory (skips the path choice)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Go straight to the directory browser
    #[arg(long, conflicts_with = "path")]
    pub browse: bool,

    /// Answer yes to every confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `version` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `pick` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PickArgs {
    /// Directory to start browsing from (defaults to the current directory)
    pub start: Option<PathBuf>,

    /// Show hidden directories from the start
    #[arg(long)]
    pub hidden: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

//! CLI argument parsing for relcheck.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Relcheck: release compliance checker.
///
/// Verifies that a product source tree and its compiled binary satisfy
/// release rules: copyright headers with correct years, the short license
/// block, README legal sections, project-name consistency, and the
/// structure of the binary's console output.
#[derive(Parser, Debug)]
#[command(name = "relcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for relcheck.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check copyright notices and years in all tracked source files.
    Copyright(CopyrightArgs),

    /// Check the short license block, License.txt, and README legal sections.
    License(LicenseArgs),

    /// Check project-name consistency across release metadata files.
    #[command(name = "project-name")]
    ProjectName(ProjectNameArgs),

    /// Check the compiled binary's --help and no-argument output.
    Console(ConsoleArgs),

    /// Run every check and aggregate all violations.
    All(AllArgs),
}

/// Input locations shared by all checks.
#[derive(Parser, Debug, Clone, Default)]
pub struct LocationArgs {
    /// Source tree root (default: $CMAKE_SOURCE_DIR, then the current directory).
    #[arg(long, value_name = "PATH")]
    pub source_dir: Option<PathBuf>,

    /// Build output directory (default: $CMAKE_BINARY_DIR, then the current directory).
    #[arg(long, value_name = "PATH")]
    pub bin_dir: Option<PathBuf>,

    /// Explicit path to the product binary (overrides --bin-dir resolution).
    #[arg(long, value_name = "PATH")]
    pub binary: Option<PathBuf>,

    /// YAML file overriding the built-in reference values.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `copyright` command.
#[derive(Parser, Debug)]
pub struct CopyrightArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Validate against this year instead of per-file commit history.
    #[arg(long, value_name = "YYYY")]
    pub year: Option<i32>,
}

/// Arguments for the `license` command.
#[derive(Parser, Debug)]
pub struct LicenseArgs {
    #[command(flatten)]
    pub location: LocationArgs,
}

/// Arguments for the `project-name` command.
#[derive(Parser, Debug)]
pub struct ProjectNameArgs {
    #[command(flatten)]
    pub location: LocationArgs,
}

/// Arguments for the `console` command.
#[derive(Parser, Debug)]
pub struct ConsoleArgs {
    #[command(flatten)]
    pub location: LocationArgs,
}

/// Arguments for the `all` command.
#[derive(Parser, Debug)]
pub struct AllArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Validate copyright notices against this year instead of commit history.
    #[arg(long, value_name = "YYYY")]
    pub year: Option<i32>,

    /// Skip the console check (no binary available).
    #[arg(long)]
    pub skip_console: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

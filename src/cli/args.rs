//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Environment variable that supplies the requirement when none is passed.
pub const REQUIREMENT_ENV: &str = "FL_XCODE_VERSION";

/// xcversion - Select an installed Xcode by version requirement.
#[derive(Debug, Parser)]
#[command(name = "xcversion")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .xcversion.yml in the project)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Only scan these directories for Xcode bundles (repeatable)
    #[arg(long = "search-path", value_name = "DIR", global = true)]
    pub search_paths: Vec<PathBuf>,

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
    /// Print the developer directory of the best matching Xcode (default)
    Select(SelectArgs),

    /// List installed Xcode versions
    List(ListArgs),

    /// Check a version requirement
    Validate(ValidateArgs),

    /// Run a command with DEVELOPER_DIR set to the selected Xcode
    Exec(ExecArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// How `select` prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SelectFormat {
    /// The developer directory path
    #[default]
    Path,
    /// An `export DEVELOPER_DIR=...` line for `eval`
    Shell,
    /// The full resolution as JSON
    Json,
}

/// Arguments for the `select` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SelectArgs {
    /// Version requirement, e.g. "~> 15.0" (defaults to the .xcode-version file)
    #[arg(env = REQUIREMENT_ENV)]
    pub requirement: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = SelectFormat::Path)]
    pub format: SelectFormat,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Mark installations satisfying this requirement
    pub requirement: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ValidateArgs {
    /// Requirement to check
    pub requirement: String,
}

/// Arguments for the `exec` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExecArgs {
    /// Version requirement (defaults to the .xcode-version file)
    #[arg(short, long, env = REQUIREMENT_ENV)]
    pub requirement: Option<String>,

    /// Command and arguments to run
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

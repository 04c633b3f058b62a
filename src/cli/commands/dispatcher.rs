//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, SelectArgs, REQUIREMENT_ENV};
use crate::config::{load_config, XcversionConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// The exit code as a process status byte.
    ///
    /// Codes outside `0..=255` keep their low byte, except that a non-zero
    /// code never becomes `0`.
    pub fn process_exit_code(&self) -> u8 {
        match self.exit_code as u8 {
            0 if self.exit_code != 0 => 1,
            code => code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load the config and apply `--search-path` overrides.
    pub fn load_config(&self, cli: &Cli) -> Result<XcversionConfig> {
        let mut config = load_config(&self.project_root, cli.config.as_deref())?;
        if !cli.search_paths.is_empty() {
            config.discovery.restrict_to(cli.search_paths.clone());
        }
        Ok(config)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Select(args)) => {
                let config = self.load_config(cli)?;
                let cmd = super::select::SelectCommand::new(&self.project_root, config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let config = self.load_config(cli)?;
                let cmd = super::list::ListCommand::new(config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Validate(args)) => {
                let cmd = super::validate::ValidateCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Exec(args)) => {
                let config = self.load_config(cli)?;
                let cmd = super::exec::ExecCommand::new(&self.project_root, config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to select; clap only reads the env var for the subcommand.
                let config = self.load_config(cli)?;
                let args = SelectArgs {
                    requirement: std::env::var(REQUIREMENT_ENV).ok(),
                    ..Default::default()
                };
                let cmd = super::select::SelectCommand::new(&self.project_root, config, args);
                cmd.execute(ui)
            }
        }
    }
}

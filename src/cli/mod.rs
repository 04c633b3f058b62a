//! Command-line interface for xcversion.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, ExecArgs, ListArgs, SelectArgs, SelectFormat, ValidateArgs,
    REQUIREMENT_ENV,
};
pub use commands::{Command, CommandDispatcher, CommandResult};

//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Exit codes
//!
//! - `0` success
//! - `1` unexpected failure (I/O, config, discovery)
//! - `2` missing or malformed requirement
//! - `3` no installed Xcode satisfies the requirement
//!
//! `exec` exits with the child's exit code once the child has run.

pub mod completions;
pub mod dispatcher;
pub mod exec;
pub mod list;
pub mod select;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use select::{EXIT_BAD_REQUIREMENT, EXIT_NO_MATCH};

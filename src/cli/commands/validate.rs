//! Validate command implementation.
//!
//! The `xcversion validate` command checks a requirement without looking
//! for installations.

use crate::cli::args::ValidateArgs;
use crate::error::Result;
use crate::requirement::parse;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::select::report_resolution_error;

/// The validate command implementation.
pub struct ValidateCommand {
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(args: ValidateArgs) -> Self {
        Self { args }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let requirement = match parse(&self.args.requirement) {
            Ok(r) => r,
            Err(e) => return report_resolution_error(e, ui),
        };

        ui.message(&requirement.to_string());
        if requirement.clauses().len() > 1 {
            ui.status(&format!("{} clauses, all must hold", requirement.clauses().len()));
        }
        ui.success(&format!("'{}' is a valid requirement", requirement.as_str()));
        Ok(CommandResult::success())
    }
}

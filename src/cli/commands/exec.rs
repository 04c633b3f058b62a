//! Exec command implementation.
//!
//! The `xcversion exec` command runs a child process with `DEVELOPER_DIR`
//! pointing at the selected Xcode.

use std::path::{Path, PathBuf};
use std::process::Command as Process;

use crate::cli::args::ExecArgs;
use crate::config::XcversionConfig;
use crate::environment::developer_env;
use crate::error::{Result, XcversionError};
use crate::resolve::resolve;
use crate::source::VersionFileSource;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::select::report_resolution_error;

/// The exec command implementation.
pub struct ExecCommand {
    project_root: PathBuf,
    config: XcversionConfig,
    args: ExecArgs,
}

impl ExecCommand {
    /// Create a new exec command.
    pub fn new(project_root: &Path, config: XcversionConfig, args: ExecArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ExecArgs {
        &self.args
    }
}

impl Command for ExecCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some((program, rest)) = self.args.command.split_first() else {
            ui.error("No command given");
            return Ok(CommandResult::failure(2));
        };

        let source = VersionFileSource::new(&self.project_root, &self.config.version_file);
        let discovery = self.config.discovery.build();
        let resolution = match resolve(self.args.requirement.as_deref(), &source, &discovery) {
            Ok(r) => r,
            Err(e) => return report_resolution_error(e, ui),
        };

        let command_line = self.args.command.join(" ");
        ui.status(&format!(
            "Running '{}' with Xcode {}",
            command_line,
            resolution.toolchain.version()
        ));
        tracing::debug!(
            "Spawning {} with DEVELOPER_DIR={}",
            program,
            resolution.developer_dir.display()
        );

        let status = Process::new(program)
            .args(rest)
            .current_dir(&self.project_root)
            .envs(developer_env(&resolution.developer_dir))
            .status()
            .map_err(|_| XcversionError::CommandFailed {
                command: command_line.clone(),
                code: None,
            })?;

        if status.success() {
            Ok(CommandResult::success())
        } else {
            tracing::debug!("'{}' exited with {:?}", command_line, status.code());
            Ok(CommandResult::failure(status.code().unwrap_or(1)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::bundle::tests::fake_xcode;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn config_for(root: &Path) -> XcversionConfig {
        let mut config = XcversionConfig::default();
        config.discovery.restrict_to(vec![root.to_path_buf()]);
        config
    }

    fn args(requirement: &str, command: &[&str]) -> ExecArgs {
        ExecArgs {
            requirement: Some(requirement.to_string()),
            command: command.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[cfg(unix)]
    #[test]
    fn passes_developer_dir_to_child() {
        let apps = TempDir::new().unwrap();
        fake_xcode(apps.path(), "Xcode.app", "15.0");
        let project = TempDir::new().unwrap();
        let out = project.path().join("out.txt");

        let script = format!("printf %s \"$DEVELOPER_DIR\" > '{}'", out.display());
        let cmd = ExecCommand::new(
            project.path(),
            config_for(apps.path()),
            args("15.0", &["sh", "-c", &script]),
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.ends_with("Xcode.app/Contents/Developer"));
    }

    #[cfg(unix)]
    #[test]
    fn propagates_child_exit_code() {
        let apps = TempDir::new().unwrap();
        fake_xcode(apps.path(), "Xcode.app", "15.0");
        let project = TempDir::new().unwrap();

        let cmd = ExecCommand::new(
            project.path(),
            config_for(apps.path()),
            args("15.0", &["sh", "-c", "exit 7"]),
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 7);
    }

    #[test]
    fn unspawnable_command_is_an_error() {
        let apps = TempDir::new().unwrap();
        fake_xcode(apps.path(), "Xcode.app", "15.0");
        let project = TempDir::new().unwrap();

        let cmd = ExecCommand::new(
            project.path(),
            config_for(apps.path()),
            args("15.0", &["xcversion-test-no-such-program"]),
        );
        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, XcversionError::CommandFailed { code: None, .. }));
    }

    #[test]
    fn unsatisfied_requirement_does_not_spawn() {
        let apps = TempDir::new().unwrap();
        fake_xcode(apps.path(), "Xcode.app", "15.0");
        let project = TempDir::new().unwrap();

        let cmd = ExecCommand::new(
            project.path(),
            config_for(apps.path()),
            args("~> 13.0", &["xcversion-test-no-such-program"]),
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 3);
        assert!(ui.has_hint("xcversion list"));
    }
}

//! Select command implementation.
//!
//! The `xcversion select` command prints the developer directory of the
//! best installed Xcode for a requirement.

use std::path::{Path, PathBuf};

use crate::cli::args::{SelectArgs, SelectFormat, REQUIREMENT_ENV};
use crate::config::XcversionConfig;
use crate::environment::shell_export;
use crate::error::{Result, XcversionError};
use crate::resolve::{resolve, RequirementOrigin, Resolution};
use crate::source::VersionFileSource;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code for a missing or malformed requirement.
pub const EXIT_BAD_REQUIREMENT: i32 = 2;

/// Exit code when no installation satisfies the requirement.
pub const EXIT_NO_MATCH: i32 = 3;

/// Report the failures a user can fix; pass anything else through.
pub(super) fn report_resolution_error(
    err: XcversionError,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    match &err {
        XcversionError::MissingRequirement { version_file } => {
            ui.error(&err.to_string());
            ui.hint(&format!(
                "Pass a requirement (e.g. `xcversion select '~> 15.0'`), set {}, or add a {} file to the project",
                REQUIREMENT_ENV, version_file
            ));
            Ok(CommandResult::failure(EXIT_BAD_REQUIREMENT))
        }
        XcversionError::InvalidRequirement { .. } => {
            ui.error(&err.to_string());
            ui.hint("Requirements look like '15.0', '~> 15.0.1', '= 14.3.1' or '>= 14.3, < 16'");
            Ok(CommandResult::failure(EXIT_BAD_REQUIREMENT))
        }
        XcversionError::NoMatchingInstallation { .. } => {
            ui.error(&err.to_string());
            ui.hint("Run `xcversion list` to see the installed versions");
            Ok(CommandResult::failure(EXIT_NO_MATCH))
        }
        _ => Err(err),
    }
}

/// The select command implementation.
pub struct SelectCommand {
    project_root: PathBuf,
    config: XcversionConfig,
    args: SelectArgs,
}

impl SelectCommand {
    /// Create a new select command.
    pub fn new(project_root: &Path, config: XcversionConfig, args: SelectArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SelectArgs {
        &self.args
    }

    fn print(&self, resolution: &Resolution, ui: &mut dyn UserInterface) -> Result<()> {
        match self.args.format {
            SelectFormat::Path => ui.message(&resolution.developer_dir.display().to_string()),
            SelectFormat::Shell => ui.message(&shell_export(&resolution.developer_dir)),
            SelectFormat::Json => {
                let json = serde_json::to_string_pretty(resolution)
                    .map_err(|e| XcversionError::Other(e.into()))?;
                ui.message(&json);
            }
        }
        Ok(())
    }
}

impl Command for SelectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = VersionFileSource::new(&self.project_root, &self.config.version_file);
        let discovery = self.config.discovery.build();

        let resolution = match resolve(self.args.requirement.as_deref(), &source, &discovery) {
            Ok(r) => r,
            Err(e) => return report_resolution_error(e, ui),
        };

        if let RequirementOrigin::VersionFile(path) = &resolution.origin {
            ui.status(&format!("Loaded required version from {}", path.display()));
        }
        ui.success(&format!(
            "Found Xcode {} at {} satisfying '{}'",
            resolution.toolchain.version(),
            resolution.toolchain.path().display(),
            resolution.requirement
        ));

        self.print(&resolution, ui)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::bundle::tests::fake_xcode;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(root: &Path) -> XcversionConfig {
        let mut config = XcversionConfig::default();
        config.discovery.restrict_to(vec![root.to_path_buf()]);
        config
    }

    fn args(requirement: Option<&str>, format: SelectFormat) -> SelectArgs {
        SelectArgs {
            requirement: requirement.map(String::from),
            format,
        }
    }

    #[test]
    fn prints_developer_dir_of_best_match() {
        let apps = TempDir::new().unwrap();
        fake_xcode(apps.path(), "Xcode-8.1.5.app", "8.1.5");
        fake_xcode(apps.path(), "Xcode-8.1.9.app", "8.1.9");
        fake_xcode(apps.path(), "Xcode-9.0.app", "9.0");

        let project = TempDir::new().unwrap();
        let cmd = SelectCommand::new(
            project.path(),
            config_for(apps.path()),
            args(Some("8.1"), SelectFormat::Path),
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let expected = apps.path().join("Xcode-8.1.9.app/Contents/Developer");
        assert_eq!(ui.messages(), &[expected.display().to_string()]);
        assert!(ui.successes()[0].contains("8.1.9"));
    }

    #[test]
    fn shell_format_prints_export() {
        let apps = TempDir::new().unwrap();
        fake_xcode(apps.path(), "Xcode.app", "15.0");

        let project = TempDir::new().unwrap();
        let cmd = SelectCommand::new(
            project.path(),
            config_for(apps.path()),
            args(Some("15.0"), SelectFormat::Shell),
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.messages()[0].starts_with("export DEVELOPER_DIR='"));
        assert!(ui.messages()[0].ends_with("Xcode.app/Contents/Developer'"));
    }

    #[test]
    fn json_format_prints_resolution() {
        let apps = TempDir::new().unwrap();
        fake_xcode(apps.path(), "Xcode.app", "15.0.1");

        let project = TempDir::new().unwrap();
        let cmd = SelectCommand::new(
            project.path(),
            config_for(apps.path()),
            args(Some("~> 15.0"), SelectFormat::Json),
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json["requirement"], "~> 15.0");
        assert_eq!(json["toolchain"]["version"], "15.0.1");
    }

    #[test]
    fn uses_version_file_when_no_requirement() {
        let apps = TempDir::new().unwrap();
        fake_xcode(apps.path(), "Xcode-14.app", "14.3.1");
        fake_xcode(apps.path(), "Xcode-15.app", "15.0");

        let project = TempDir::new().unwrap();
        fs::write(project.path().join(".xcode-version"), "14.3\n").unwrap();

        let cmd = SelectCommand::new(
            project.path(),
            config_for(apps.path()),
            args(None, SelectFormat::Path),
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.messages()[0].contains("Xcode-14.app"));
        assert!(ui.has_status(".xcode-version"));
    }

    #[test]
    fn no_match_fails_with_hint() {
        let apps = TempDir::new().unwrap();
        fake_xcode(apps.path(), "Xcode.app", "15.0");

        let project = TempDir::new().unwrap();
        let cmd = SelectCommand::new(
            project.path(),
            config_for(apps.path()),
            args(Some("~> 13.0"), SelectFormat::Path),
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_NO_MATCH);
        assert!(ui.messages().is_empty());
        assert!(ui.has_error("~> 13.0"));
        assert!(ui.has_hint("xcversion list"));
    }

    #[test]
    fn invalid_requirement_fails_with_hint() {
        let apps = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let cmd = SelectCommand::new(
            project.path(),
            config_for(apps.path()),
            args(Some(">= 8.a.0"), SelectFormat::Path),
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_BAD_REQUIREMENT);
        assert!(ui.has_error("8.a.0"));
    }

    #[test]
    fn missing_requirement_fails_with_hint() {
        let apps = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let mut config = config_for(apps.path());
        config.version_file = "xcversion-test-missing-file".to_string();

        let cmd = SelectCommand::new(project.path(), config, args(None, SelectFormat::Path));
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_BAD_REQUIREMENT);
        assert!(ui.has_error("xcversion-test-missing-file"));
        assert!(ui.has_hint(REQUIREMENT_ENV));
    }

    #[test]
    fn other_errors_propagate() {
        let err = XcversionError::Other(anyhow::anyhow!("boom"));
        let mut ui = MockUI::new();
        assert!(report_resolution_error(err, &mut ui).is_err());
        assert!(ui.errors().is_empty());
    }
}

//! List command implementation.
//!
//! The `xcversion list` command shows every discovered Xcode, best first,
//! optionally marking the ones that satisfy a requirement.

use console::Term;
use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::config::XcversionConfig;
use crate::discovery::ToolchainDiscovery;
use crate::error::{Result, XcversionError};
use crate::requirement::{parse, Requirement};
use crate::selection::{sort_best_first, InstalledToolchain};
use crate::ui::{UserInterface, XcversionTheme};

use super::dispatcher::{Command, CommandResult};
use super::select::report_resolution_error;

/// One row of `list` output.
#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    #[serde(flatten)]
    toolchain: &'a InstalledToolchain,
    developer_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    satisfies: Option<bool>,
    selected: bool,
}

/// The list command implementation.
pub struct ListCommand {
    config: XcversionConfig,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config: XcversionConfig, args: ListArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn entries<'a>(
        toolchains: &'a [InstalledToolchain],
        requirement: Option<&Requirement>,
    ) -> Vec<ListEntry<'a>> {
        // Sorted best first, so the first satisfying entry is the selection.
        let selected = requirement
            .and_then(|req| toolchains.iter().position(|t| req.is_satisfied_by(t.version())));

        toolchains
            .iter()
            .enumerate()
            .map(|(i, toolchain)| ListEntry {
                toolchain,
                developer_dir: toolchain.developer_dir().display().to_string(),
                satisfies: requirement.map(|req| req.is_satisfied_by(toolchain.version())),
                selected: selected == Some(i),
            })
            .collect()
    }

    fn print_table(&self, entries: &[ListEntry<'_>], ui: &mut dyn UserInterface) {
        // The table goes to stdout, which may be redirected while stderr is not.
        let theme = XcversionTheme::for_term(&Term::stdout());

        let width = entries
            .iter()
            .map(|e| e.toolchain.version().to_string().len())
            .max()
            .unwrap_or(0);

        for entry in entries {
            let marker = if entry.selected { "*" } else { " " };
            let version = format!("{:<width$}", entry.toolchain.version().to_string());
            let path = entry.toolchain.path().display().to_string();
            let line = match entry.satisfies {
                Some(false) => format!(
                    "{} {}  {}",
                    marker,
                    theme.dim.apply_to(version),
                    theme.dim.apply_to(path)
                ),
                _ if entry.selected => {
                    format!("{} {}  {}", marker, theme.highlight.apply_to(version), path)
                }
                _ => format!("{} {}  {}", marker, version, path),
            };
            ui.message(&line);
            if ui.output_mode().shows_detail() {
                ui.message(&format!("    {}", theme.dim.apply_to(&entry.developer_dir)));
            }
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let requirement = match self.args.requirement.as_deref().map(parse).transpose() {
            Ok(r) => r,
            Err(e) => return report_resolution_error(e, ui),
        };

        let discovery = self.config.discovery.build();
        let mut toolchains = discovery.discover()?;
        sort_best_first(&mut toolchains);
        tracing::debug!("Listing {} installation(s)", toolchains.len());

        let entries = Self::entries(&toolchains, requirement.as_ref());

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| XcversionError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if entries.is_empty() {
            ui.warning("No Xcode installations found");
            ui.hint("Use --search-path to scan another directory");
            return Ok(CommandResult::success());
        }

        self.print_table(&entries, ui);

        if let Some(req) = &requirement {
            match entries.iter().find(|e| e.selected) {
                Some(entry) => ui.status(&format!(
                    "'{}' selects {}",
                    req,
                    entry.toolchain.path().display()
                )),
                None => ui.warning(&format!("Nothing installed satisfies '{}'", req)),
            }
        }

        Ok(CommandResult::success())
    }
}

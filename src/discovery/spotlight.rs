//! Spotlight-based discovery.
//!
//! Asks `mdfind` for every bundle with the Xcode bundle identifier, which
//! also finds installations outside `/Applications`.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Context, Result};

use super::bundle::{read_bundle, XCODE_BUNDLE_ID};
use super::ToolchainDiscovery;
use crate::selection::InstalledToolchain;

/// Queries the Spotlight index through `mdfind`.
#[derive(Debug, Clone)]
pub struct SpotlightDiscovery {
    program: String,
}

impl SpotlightDiscovery {
    /// Create a discovery that runs the system `mdfind`.
    pub fn new() -> Self {
        Self {
            program: "mdfind".to_string(),
        }
    }

    /// Use a different executable in place of `mdfind`.
    pub fn with_program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    /// The Spotlight query passed to `mdfind`.
    pub fn query() -> String {
        format!("kMDItemCFBundleIdentifier == '{}'", XCODE_BUNDLE_ID)
    }
}

impl Default for SpotlightDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

/// Bundle paths from `mdfind` output, one per non-blank line.
fn bundle_paths(stdout: &str) -> Vec<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

impl ToolchainDiscovery for SpotlightDiscovery {
    fn name(&self) -> &str {
        "spotlight"
    }

    fn discover(&self) -> Result<Vec<InstalledToolchain>> {
        let output = Command::new(&self.program)
            .arg(Self::query())
            .output()
            .with_context(|| format!("Failed to run {}", self.program))?;

        if !output.status.success() {
            bail!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(bundle_paths(&stdout)
            .iter()
            .filter_map(|path| read_bundle(path))
            .collect())
    }
}

//! Directory-based discovery.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::bundle::read_bundle;
use super::ToolchainDiscovery;
use crate::selection::InstalledToolchain;

/// Default root searched for Xcode bundles.
pub const DEFAULT_SEARCH_PATH: &str = "/Applications";

/// Scans the direct children of each root for `*.app` Xcode bundles.
#[derive(Debug, Clone)]
pub struct DirectoryDiscovery {
    roots: Vec<PathBuf>,
}

impl DirectoryDiscovery {
    /// Create a scanner over the given roots.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// The roots that will be scanned.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl Default for DirectoryDiscovery {
    fn default() -> Self {
        Self::new(vec![PathBuf::from(DEFAULT_SEARCH_PATH)])
    }
}

impl ToolchainDiscovery for DirectoryDiscovery {
    fn name(&self) -> &str {
        "directory"
    }

    fn discover(&self) -> Result<Vec<InstalledToolchain>> {
        let mut found = Vec::new();

        for root in &self.roots {
            let entries = match fs::read_dir(root) {
                Ok(entries) => entries,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!("Search path {} does not exist", root.display());
                    continue;
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("Failed to read {}", root.display()));
                }
            };

            let mut bundles: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| path.extension().is_some_and(|ext| ext == "app") && path.is_dir())
                .collect();
            bundles.sort();

            for bundle in bundles {
                if let Some(toolchain) = read_bundle(&bundle) {
                    tracing::debug!(
                        "Found Xcode {} at {}",
                        toolchain.version(),
                        toolchain.path().display()
                    );
                    found.push(toolchain);
                }
            }
        }

        Ok(found)
    }
}

//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `.xcversion.yml` file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::discovery::{
    CombinedDiscovery, DirectoryDiscovery, SpotlightDiscovery, DEFAULT_SEARCH_PATH,
};
use crate::source::DEFAULT_VERSION_FILE;

/// Root configuration structure for `.xcversion.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XcversionConfig {
    /// Name of the project-local file holding the fallback requirement
    #[serde(default = "default_version_file")]
    pub version_file: String,

    /// How installed Xcodes are found
    pub discovery: DiscoveryConfig,
}

impl Default for XcversionConfig {
    fn default() -> Self {
        Self {
            version_file: default_version_file(),
            discovery: DiscoveryConfig::default(),
        }
    }
}

/// Discovery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Query the Spotlight index with `mdfind`
    #[serde(default = "default_spotlight")]
    pub spotlight: bool,

    /// Directories whose `*.app` children are scanned
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<PathBuf>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            spotlight: default_spotlight(),
            search_paths: default_search_paths(),
        }
    }
}

impl DiscoveryConfig {
    /// Replace the search paths and turn Spotlight off.
    pub fn restrict_to(&mut self, search_paths: Vec<PathBuf>) {
        self.spotlight = false;
        self.search_paths = search_paths;
    }

    /// Build the discovery strategies this config describes.
    ///
    /// Spotlight runs first so its paths win de-duplication.
    pub fn build(&self) -> CombinedDiscovery {
        let mut discovery = CombinedDiscovery::new();
        if self.spotlight {
            discovery = discovery.with(SpotlightDiscovery::new());
        }
        if !self.search_paths.is_empty() {
            discovery = discovery.with(DirectoryDiscovery::new(self.search_paths.clone()));
        }
        discovery
    }
}

fn default_version_file() -> String {
    DEFAULT_VERSION_FILE.to_string()
}

fn default_spotlight() -> bool {
    cfg!(target_os = "macos")
}

fn default_search_paths() -> Vec<PathBuf> {
    vec![PathBuf::from(DEFAULT_SEARCH_PATH)]
}

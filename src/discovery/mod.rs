//! Discovery of installed Xcode versions.
//!
//! Discovery is the only part of xcversion that inspects the machine. Each
//! strategy implements [`ToolchainDiscovery`]; [`CombinedDiscovery`] runs
//! several and drops duplicate bundle paths.
//!
//! # Modules
//!
//! - [`bundle`] - Reading versions out of `.app` bundles
//! - [`directory`] - Scanning directories such as `/Applications`
//! - [`spotlight`] - Querying the Spotlight index with `mdfind`
//!
//! # Example
//!
//! ```
//! use xcversion::discovery::{StaticDiscovery, ToolchainDiscovery};
//! use xcversion::selection::InstalledToolchain;
//!
//! let discovery = StaticDiscovery::new(vec![InstalledToolchain::new(
//!     "15.0".parse().unwrap(),
//!     "/Applications/Xcode.app",
//! )]);
//! assert_eq!(discovery.discover().unwrap().len(), 1);
//! ```

pub mod bundle;
pub mod directory;
pub mod spotlight;

pub use directory::{DirectoryDiscovery, DEFAULT_SEARCH_PATH};
pub use spotlight::SpotlightDiscovery;

use std::collections::HashSet;

use anyhow::Result;

use crate::selection::InstalledToolchain;

/// A source of installed toolchains.
pub trait ToolchainDiscovery {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Enumerate the installed toolchains.
    fn discover(&self) -> Result<Vec<InstalledToolchain>>;
}

/// A fixed list of toolchains.
#[derive(Debug, Clone, Default)]
pub struct StaticDiscovery {
    toolchains: Vec<InstalledToolchain>,
}

impl StaticDiscovery {
    /// Create a discovery that always reports `toolchains`.
    pub fn new(toolchains: Vec<InstalledToolchain>) -> Self {
        Self { toolchains }
    }
}

impl ToolchainDiscovery for StaticDiscovery {
    fn name(&self) -> &str {
        "static"
    }

    fn discover(&self) -> Result<Vec<InstalledToolchain>> {
        Ok(self.toolchains.clone())
    }
}

/// Runs several strategies in order, keeping the first record per path.
#[derive(Default)]
pub struct CombinedDiscovery {
    strategies: Vec<Box<dyn ToolchainDiscovery>>,
}

impl CombinedDiscovery {
    /// Create an empty combination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strategy.
    pub fn with(mut self, strategy: impl ToolchainDiscovery + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Names of the configured strategies, in run order.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}

impl ToolchainDiscovery for CombinedDiscovery {
    fn name(&self) -> &str {
        "combined"
    }

    fn discover(&self) -> Result<Vec<InstalledToolchain>> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();

        for strategy in &self.strategies {
            let toolchains = strategy.discover()?;
            tracing::debug!(
                "Discovery '{}' reported {} installation(s)",
                strategy.name(),
                toolchains.len()
            );
            for toolchain in toolchains {
                if seen.insert(toolchain.path().to_path_buf()) {
                    found.push(toolchain);
                }
            }
        }

        Ok(found)
    }
}

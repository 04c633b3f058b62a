//! Configuration loading and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and validation in [`loader`]
//!
//! # Example
//!
//! ```
//! use xcversion::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".xcversion.yml"),
//!     "discovery:\n  spotlight: false\n  search_paths: [/Volumes/Xcodes]\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert!(!config.discovery.spotlight);
//! assert_eq!(config.version_file, ".xcode-version");
//! ```
//!
//! # Configuration File Locations
//!
//! 1. `--config PATH`, when given
//! 2. Project config (`.xcversion.yml` in the project root)
//! 3. Built-in defaults

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, validate, PROJECT_CONFIG_FILE};
pub use schema::{DiscoveryConfig, XcversionConfig};

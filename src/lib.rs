//! xcversion - Select an installed Xcode by version requirement.
//!
//! Given a requirement such as `~> 15.0` (from the command line,
//! `FL_XCODE_VERSION`, or a project's `.xcode-version` file), xcversion
//! finds the installed Xcode bundles, picks the highest version that
//! satisfies the requirement, and reports its `Contents/Developer`
//! directory for use as `DEVELOPER_DIR`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project configuration loading and validation
//! - [`discovery`] - Finding installed Xcode bundles
//! - [`environment`] - Exporting `DEVELOPER_DIR`
//! - [`error`] - Error types and result aliases
//! - [`requirement`] - Requirement parsing and matching
//! - [`resolve`] - Requirement to developer directory, end to end
//! - [`selection`] - Choosing the best installation
//! - [`source`] - Fallback requirement sources such as `.xcode-version`
//! - [`ui`] - Terminal output
//! - [`version`] - Dotted numeric versions
//!
//! # Example
//!
//! ```
//! use xcversion::requirement::parse;
//!
//! let req = parse(">= 14.3, < 16").unwrap();
//! assert!(req.is_satisfied_by(&"15.2".parse().unwrap()));
//! assert!(!req.is_satisfied_by(&"16.0".parse().unwrap()));
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod environment;
pub mod error;
pub mod requirement;
pub mod resolve;
pub mod selection;
pub mod source;
pub mod ui;
pub mod version;

pub use error::{Result, XcversionError};

//! Choosing an installation for a requirement.
//!
//! [`select`] collapses the candidates to a single winner: the highest
//! version satisfying the requirement. When several installations share
//! that version, the one with the lexicographically smallest install path
//! wins, so the result never depends on the order discovery reported them.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::requirement::Requirement;
use crate::version::Version;

/// An installed Xcode as reported by discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledToolchain {
    version: Version,
    path: PathBuf,
}

impl InstalledToolchain {
    /// Create a toolchain record.
    pub fn new(version: Version, path: impl Into<PathBuf>) -> Self {
        Self {
            version,
            path: path.into(),
        }
    }

    /// The installed version.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// The application bundle path, e.g. `/Applications/Xcode.app`.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The developer directory inside the bundle.
    pub fn developer_dir(&self) -> PathBuf {
        self.path.join("Contents").join("Developer")
    }
}

/// Best-first order: higher version first, then smaller path.
fn preference(a: &InstalledToolchain, b: &InstalledToolchain) -> Ordering {
    b.version.cmp(&a.version).then_with(|| a.path.cmp(&b.path))
}

/// Sort toolchains best first.
pub fn sort_best_first(toolchains: &mut [InstalledToolchain]) {
    toolchains.sort_by(preference);
}

/// Every candidate satisfying `requirement`, best first.
pub fn matching<'a>(
    requirement: &Requirement,
    candidates: &'a [InstalledToolchain],
) -> Vec<&'a InstalledToolchain> {
    let mut matches: Vec<_> = candidates
        .iter()
        .filter(|t| requirement.is_satisfied_by(&t.version))
        .collect();
    matches.sort_by(|a, b| preference(a, b));
    matches
}

/// The best candidate satisfying `requirement`, or `None`.
///
/// # Example
///
/// ```
/// use xcversion::requirement::parse;
/// use xcversion::selection::{select, InstalledToolchain};
///
/// let candidates = vec![
///     InstalledToolchain::new("8.1.0".parse().unwrap(), "/Applications/Xcode-8.1.app"),
///     InstalledToolchain::new("8.1.2".parse().unwrap(), "/Applications/Xcode-8.1.2.app"),
///     InstalledToolchain::new("8.2.0".parse().unwrap(), "/Applications/Xcode-8.2.app"),
/// ];
/// let winner = select(&parse("~> 8.1.0").unwrap(), &candidates).unwrap();
/// assert_eq!(winner.version().to_string(), "8.1.2");
/// ```
pub fn select(
    requirement: &Requirement,
    candidates: &[InstalledToolchain],
) -> Option<InstalledToolchain> {
    candidates
        .iter()
        .filter(|t| requirement.is_satisfied_by(&t.version))
        .min_by(|a, b| preference(a, b))
        .cloned()
}

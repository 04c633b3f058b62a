//! Resolving a requirement to a developer directory.
//!
//! One linear pass: pick the requirement string, parse it, discover
//! installations, select one. The first failure ends the pass. Nothing here
//! touches the process environment; callers decide what to do with the
//! returned [`Resolution`].

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::discovery::ToolchainDiscovery;
use crate::error::{Result, XcversionError};
use crate::requirement::parse;
use crate::selection::{select, InstalledToolchain};
use crate::source::VersionSource;

/// Where the requirement string came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum RequirementOrigin {
    /// Passed on the command line or through `FL_XCODE_VERSION`.
    Explicit,
    /// Read from a version file.
    VersionFile(PathBuf),
}

impl fmt::Display for RequirementOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => write!(f, "explicit"),
            Self::VersionFile(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The outcome of a successful resolution.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// The requirement string that was satisfied.
    pub requirement: String,
    /// Where the requirement came from.
    pub origin: RequirementOrigin,
    /// The selected installation.
    pub toolchain: InstalledToolchain,
    /// `Contents/Developer` inside the selected installation.
    pub developer_dir: PathBuf,
}

/// Pick the requirement string: the explicit one, else the fallback source.
///
/// An empty explicit value counts as absent. A whitespace-only one does not,
/// and fails later as an invalid requirement.
pub fn requirement_string(
    explicit: Option<&str>,
    source: &dyn VersionSource,
) -> Result<(String, RequirementOrigin)> {
    if let Some(raw) = explicit.filter(|raw| !raw.is_empty()) {
        return Ok((raw.to_string(), RequirementOrigin::Explicit));
    }

    match source.resolve()? {
        Some(found) => Ok((found.requirement, RequirementOrigin::VersionFile(found.path))),
        None => Err(XcversionError::MissingRequirement {
            version_file: source.describe().to_string(),
        }),
    }
}

/// Resolve a requirement to the best installed Xcode.
///
/// # Errors
///
/// - [`XcversionError::MissingRequirement`] when `explicit` is absent and
///   `source` finds nothing
/// - [`XcversionError::InvalidRequirement`] when the string does not parse
/// - [`XcversionError::NoMatchingInstallation`] when nothing satisfies it
/// - [`XcversionError::Other`] when a collaborator fails
///
/// # Example
///
/// ```
/// use xcversion::discovery::StaticDiscovery;
/// use xcversion::resolve::resolve;
/// use xcversion::selection::InstalledToolchain;
/// use xcversion::source::NoVersionSource;
///
/// let discovery = StaticDiscovery::new(vec![
///     InstalledToolchain::new("8.1.5".parse().unwrap(), "/Applications/Xcode-8.1.5.app"),
///     InstalledToolchain::new("8.1.9".parse().unwrap(), "/Applications/Xcode-8.1.9.app"),
/// ]);
/// let resolution = resolve(Some("8.1"), &NoVersionSource, &discovery).unwrap();
/// assert!(resolution.developer_dir.ends_with("Xcode-8.1.9.app/Contents/Developer"));
/// ```
pub fn resolve(
    explicit: Option<&str>,
    source: &dyn VersionSource,
    discovery: &dyn ToolchainDiscovery,
) -> Result<Resolution> {
    let (raw, origin) = requirement_string(explicit, source)?;
    let requirement = parse(&raw)?;
    tracing::debug!("Requirement '{}' parsed as '{}'", raw, requirement);

    let candidates = discovery.discover()?;
    tracing::debug!(
        "Discovery '{}' found {} installation(s)",
        discovery.name(),
        candidates.len()
    );

    let toolchain = select(&requirement, &candidates).ok_or_else(|| {
        XcversionError::NoMatchingInstallation {
            requirement: requirement.as_str().to_string(),
        }
    })?;

    tracing::debug!(
        "Found Xcode version {} at {} satisfying requirement {}",
        toolchain.version(),
        toolchain.path().display(),
        requirement.as_str()
    );

    Ok(Resolution {
        requirement: requirement.as_str().to_string(),
        origin,
        developer_dir: toolchain.developer_dir(),
        toolchain,
    })
}

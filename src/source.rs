//! Fallback requirement sources.
//!
//! When no requirement is passed explicitly, a [`VersionSource`] supplies
//! one. The standard source is a `.xcode-version` file in the project
//! directory or one of its ancestors.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Default name of the project-local version file.
pub const DEFAULT_VERSION_FILE: &str = ".xcode-version";

/// A requirement string read from a fallback source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedRequirement {
    /// The requirement, trimmed.
    pub requirement: String,
    /// Where it was read from.
    pub path: PathBuf,
}

/// Supplies a fallback requirement string.
pub trait VersionSource {
    /// What the source looks for, for "not found" messages.
    fn describe(&self) -> &str;

    /// Look up the fallback requirement.
    ///
    /// `Ok(None)` means "not found"; `Err` means the source exists but could
    /// not be read.
    fn resolve(&self) -> Result<Option<SourcedRequirement>>;
}

/// Looks for a version file starting at a directory and walking up.
#[derive(Debug, Clone)]
pub struct VersionFileSource {
    start: PathBuf,
    file_name: String,
}

impl VersionFileSource {
    /// Search from `start` for a file named `file_name`.
    pub fn new(start: &Path, file_name: &str) -> Self {
        Self {
            start: start.to_path_buf(),
            file_name: file_name.to_string(),
        }
    }

    /// Search from `start` for `.xcode-version`.
    pub fn in_project(start: &Path) -> Self {
        Self::new(start, DEFAULT_VERSION_FILE)
    }

    /// Path of the nearest version file, if any.
    pub fn find(&self) -> Option<PathBuf> {
        self.start
            .ancestors()
            .map(|dir| dir.join(&self.file_name))
            .find(|candidate| candidate.is_file())
    }
}

impl VersionSource for VersionFileSource {
    fn describe(&self) -> &str {
        &self.file_name
    }

    fn resolve(&self) -> Result<Option<SourcedRequirement>> {
        let Some(path) = self.find() else {
            return Ok(None);
        };

        tracing::debug!("Loading required version from {}", path.display());
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Ok(Some(SourcedRequirement {
            requirement: content.trim().to_string(),
            path,
        }))
    }
}

/// A source that never finds anything.
#[derive(Debug, Clone, Default)]
pub struct NoVersionSource;

impl VersionSource for NoVersionSource {
    fn describe(&self) -> &str {
        DEFAULT_VERSION_FILE
    }

    fn resolve(&self) -> Result<Option<SourcedRequirement>> {
        Ok(None)
    }
}

//! Configuration file discovery and loading.

use crate::config::schema::XcversionConfig;
use crate::error::{Result, XcversionError};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project config file.
pub const PROJECT_CONFIG_FILE: &str = ".xcversion.yml";

/// Find the project config at `<project_root>/.xcversion.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(PROJECT_CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Parse YAML content into [`XcversionConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<XcversionConfig> {
    // An empty file deserializes as YAML null rather than an empty mapping.
    if content.trim().is_empty() {
        return Ok(XcversionConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| XcversionError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<XcversionConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            XcversionError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            XcversionError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Check values serde cannot.
pub fn validate(config: &XcversionConfig) -> Result<()> {
    let name = config.version_file.trim();
    if name.is_empty() {
        return Err(XcversionError::ConfigValidationError {
            message: "version_file must not be empty".to_string(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(XcversionError::ConfigValidationError {
            message: format!("version_file must be a file name, got '{}'", name),
        });
    }
    Ok(())
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// project config is used when present, and defaults when not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<XcversionConfig> {
    let config = match config_override {
        Some(path) => load_config_file(path)?,
        None => match find_project_config(project_root) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                load_config_file(&path)?
            }
            None => XcversionConfig::default(),
        },
    };

    validate(&config)?;
    Ok(config)
}

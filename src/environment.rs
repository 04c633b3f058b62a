//! Handing the selected developer directory to later build steps.
//!
//! xcversion never changes its own environment. A shell picks the value up
//! from [`shell_export`] output, and child processes get it through
//! [`developer_env`].

use std::collections::HashMap;
use std::path::Path;

/// Variable read by `xcrun`, `xcodebuild` and friends.
pub const DEVELOPER_DIR: &str = "DEVELOPER_DIR";

/// Quote `value` for a POSIX shell.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// An `export DEVELOPER_DIR=...` line suitable for `eval`.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use xcversion::environment::shell_export;
///
/// let line = shell_export(Path::new("/Applications/Xcode.app/Contents/Developer"));
/// assert_eq!(line, "export DEVELOPER_DIR='/Applications/Xcode.app/Contents/Developer'");
/// ```
pub fn shell_export(developer_dir: &Path) -> String {
    format!(
        "export {}={}",
        DEVELOPER_DIR,
        shell_quote(&developer_dir.to_string_lossy())
    )
}

/// Environment overrides for a child process.
pub fn developer_env(developer_dir: &Path) -> HashMap<String, String> {
    HashMap::from([(
        DEVELOPER_DIR.to_string(),
        developer_dir.to_string_lossy().into_owned(),
    )])
}

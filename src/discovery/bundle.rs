//! Reading an Xcode application bundle.
//!
//! Only XML property lists are understood. A bundle that cannot be read is
//! not an error: it is skipped and logged at debug level, since one broken
//! `.app` in `/Applications` must not hide the others.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::selection::InstalledToolchain;
use crate::version::Version;

/// Bundle identifier shared by release and beta Xcode builds.
pub const XCODE_BUNDLE_ID: &str = "com.apple.dt.Xcode";

static RE_BUNDLE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| plist_key_regex("CFBundleIdentifier"));

static RE_SHORT_VERSION: LazyLock<Regex> =
    LazyLock::new(|| plist_key_regex("CFBundleShortVersionString"));

fn plist_key_regex(key: &str) -> Regex {
    Regex::new(&format!(
        r"<key>\s*{}\s*</key>\s*<string>\s*([^<]*?)\s*</string>",
        regex::escape(key)
    ))
    .unwrap()
}

fn plist_value(re: &Regex, content: &str) -> Option<String> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// `CFBundleIdentifier` from an XML property list.
pub fn bundle_identifier(content: &str) -> Option<String> {
    plist_value(&RE_BUNDLE_IDENTIFIER, content)
}

/// `CFBundleShortVersionString` from an XML property list.
pub fn short_version(content: &str) -> Option<String> {
    plist_value(&RE_SHORT_VERSION, content)
}

fn read_plist(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::debug!("Cannot read {}: {}", path.display(), e);
            None
        }
    }
}

/// Read the Xcode installation at `bundle`, if it is one.
///
/// The bundle identifier comes from `Contents/Info.plist`. The version is
/// `CFBundleShortVersionString` from `Contents/version.plist`, falling back
/// to `Contents/Info.plist`.
pub fn read_bundle(bundle: &Path) -> Option<InstalledToolchain> {
    let contents = bundle.join("Contents");
    let info = read_plist(&contents.join("Info.plist"))?;

    let bundle_id = bundle_identifier(&info);
    if bundle_id.as_deref() != Some(XCODE_BUNDLE_ID) {
        tracing::debug!(
            "Skipping {}: bundle identifier {:?}",
            bundle.display(),
            bundle_id
        );
        return None;
    }

    let raw_version = contents
        .join("version.plist")
        .is_file()
        .then(|| read_plist(&contents.join("version.plist")))
        .flatten()
        .and_then(|plist| short_version(&plist))
        .or_else(|| short_version(&info));

    let Some(raw_version) = raw_version else {
        tracing::debug!("Skipping {}: no version string", bundle.display());
        return None;
    };

    match raw_version.parse::<Version>() {
        Ok(version) => Some(InstalledToolchain::new(version, bundle)),
        Err(e) => {
            tracing::debug!(
                "Skipping {}: version '{}' is not usable: {}",
                bundle.display(),
                raw_version,
                e
            );
            None
        }
    }
}

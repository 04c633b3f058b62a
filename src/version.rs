//! Dotted numeric versions.
//!
//! A [`Version`] is a non-empty list of non-negative integer components
//! ordered lexicographically, where a missing trailing component compares
//! as `0`. That makes `8.1` and `8.1.0` equal, and equality and hashing
//! follow the same rule so `Version` can be used as a map key.
//!
//! # Example
//!
//! ```
//! use xcversion::version::Version;
//!
//! let a: Version = "8.1".parse().unwrap();
//! let b: Version = "8.1.0".parse().unwrap();
//! let c: Version = "8.1.2".parse().unwrap();
//! assert_eq!(a, b);
//! assert!(b < c);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a version string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ParseVersionError {
    /// The rejected input.
    pub input: String,
    /// Human-readable reason.
    pub reason: String,
}

impl ParseVersionError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// A dotted numeric version such as `15.0.1`.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Create a version from its components.
    ///
    /// Returns `None` when `components` is empty.
    pub fn new(components: Vec<u64>) -> Option<Self> {
        if components.is_empty() {
            None
        } else {
            Some(Self { components })
        }
    }

    /// The components as written, without trailing-zero padding.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Component at `index`, or `0` past the end.
    pub fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }

    /// The exclusive upper bound of a pessimistic match on this version.
    ///
    /// Drops the last component (unless it is the only one) and increments
    /// the new last one: `8.1.0` bumps to `8.2`, `8.1` to `9`, `8` to `9`.
    pub fn bump(&self) -> Version {
        let mut components = self.components.clone();
        if components.len() > 1 {
            components.pop();
        }
        if let Some(last) = components.last_mut() {
            *last = last.saturating_add(1);
        }
        Version { components }
    }

    /// Components with trailing zeros removed; the canonical form for
    /// equality and hashing.
    fn significant(&self) -> &[u64] {
        let len = self
            .components
            .iter()
            .rposition(|&c| c != 0)
            .map_or(0, |i| i + 1);
        &self.components[..len]
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseVersionError::new(s, "version has no numeric components"));
        }

        let mut components = Vec::new();
        for part in s.split('.') {
            if part.is_empty() {
                return Err(ParseVersionError::new(s, "empty version component"));
            }
            // `u64::from_str` accepts a leading '+', which is not a version digit.
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseVersionError::new(
                    s,
                    format!("non-numeric component '{}'", part),
                ));
            }
            let value = part.parse::<u64>().map_err(|_| {
                ParseVersionError::new(s, format!("component '{}' is too large", part))
            })?;
            components.push(value);
        }

        Ok(Self { components })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.components {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", c)?;
            first = false;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

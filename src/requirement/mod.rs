//! Version requirements.
//!
//! A [`Requirement`] is a conjunction of [`Clause`]s, each pairing an
//! [`Operator`] with a [`Version`]. A candidate satisfies the requirement
//! only when every clause holds.
//!
//! # Modules
//!
//! - [`operator`] - Comparison operators and their semantics
//! - [`parser`] - Parsing and validation of requirement strings
//!
//! # Example
//!
//! ```
//! use xcversion::requirement::parse;
//!
//! // A bare version is a pessimistic match, not an exact one.
//! let req = parse("8.1").unwrap();
//! assert!(req.is_satisfied_by(&"8.9".parse().unwrap()));
//! assert!(!req.is_satisfied_by(&"9.0".parse().unwrap()));
//! ```

pub mod operator;
pub mod parser;

pub use operator::Operator;
pub use parser::{parse, validate};

use std::fmt;

use crate::version::Version;

/// A single `<operator> <version>` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Comparison operator.
    pub op: Operator,
    /// Version to compare against.
    pub version: Version,
}

impl Clause {
    /// Whether `candidate` satisfies this clause.
    pub fn matches(&self, candidate: &Version) -> bool {
        self.op.matches(candidate, &self.version)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op, self.version)
    }
}

/// A parsed requirement expression. Build one with [`parse`].
#[derive(Debug, Clone)]
pub struct Requirement {
    raw: String,
    clauses: Vec<Clause>,
}

impl Requirement {
    /// The requirement as the user wrote it, trimmed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The clauses, in written order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Whether `candidate` satisfies every clause.
    pub fn is_satisfied_by(&self, candidate: &Version) -> bool {
        self.clauses.iter().all(|clause| clause.matches(candidate))
    }
}

/// Normalized form, e.g. `~> 8.1, != 8.1.3`.
impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

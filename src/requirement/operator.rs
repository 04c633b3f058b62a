//! Comparison operators.

use std::fmt;
use std::str::FromStr;

use crate::version::Version;

/// Comparison operator of a single requirement clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `~>`: at least the version, below its [`Version::bump`].
    Pessimistic,
}

impl Operator {
    /// All operators, longest tokens first.
    pub const ALL: [Operator; 7] = [
        Operator::Pessimistic,
        Operator::GreaterOrEqual,
        Operator::LessOrEqual,
        Operator::NotEqual,
        Operator::Equal,
        Operator::Greater,
        Operator::Less,
    ];

    /// The operator token as written in a requirement.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Pessimistic => "~>",
        }
    }

    /// Whether `candidate` satisfies `<self> <version>`.
    pub fn matches(&self, candidate: &Version, version: &Version) -> bool {
        match self {
            Self::Equal => candidate == version,
            Self::NotEqual => candidate != version,
            Self::Greater => candidate > version,
            Self::GreaterOrEqual => candidate >= version,
            Self::Less => candidate < version,
            Self::LessOrEqual => candidate <= version,
            Self::Pessimistic => candidate >= version && *candidate < version.bump(),
        }
    }

    /// Whether `c` can appear in an operator token.
    pub(crate) fn is_operator_char(c: char) -> bool {
        matches!(c, '~' | '>' | '<' | '=' | '!')
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| format!("unknown operator '{}'", s))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

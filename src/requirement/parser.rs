//! Requirement string parsing.
//!
//! Grammar: one or more comma-separated clauses, each an optional operator
//! followed by optional whitespace and a dotted numeric version. A clause
//! without an operator is a pessimistic (`~>`) match.

use std::sync::LazyLock;

use regex::Regex;

use super::operator::Operator;
use super::{Clause, Requirement};
use crate::error::{Result, XcversionError};
use crate::version::Version;

static RE_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(?P<op>[~<>=!]*)\s*(?P<version>.*)$").unwrap());

/// Parse a requirement expression such as `"~> 8.1.0"` or `">= 7.3, < 8"`.
///
/// # Errors
///
/// Returns [`XcversionError::InvalidRequirement`] when the string is blank,
/// contains an empty clause, an unknown operator, or a version that is not
/// dotted numeric.
///
/// # Example
///
/// ```
/// use xcversion::requirement::parse;
///
/// let req = parse("~> 8.1.0").unwrap();
/// assert!(req.is_satisfied_by(&"8.1.2".parse().unwrap()));
/// assert!(!req.is_satisfied_by(&"8.2.0".parse().unwrap()));
/// ```
pub fn parse(raw: &str) -> Result<Requirement> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(XcversionError::invalid_requirement(
            raw,
            raw,
            "requirement is empty",
        ));
    }

    let mut clauses = Vec::new();
    let mut start = 0;
    for clause in trimmed.split(',') {
        let end = start + clause.len();
        // Up to and including the comma after this clause, so an empty
        // clause is still located in the message.
        let context = &trimmed[..(end + 1).min(trimmed.len())];
        clauses.push(parse_clause(raw, clause, context)?);
        start = end + 1;
    }

    Ok(Requirement {
        raw: trimmed.to_string(),
        clauses,
    })
}

/// Whether `raw` is a well-formed requirement.
pub fn validate(raw: &str) -> bool {
    parse(raw).is_ok()
}

fn parse_clause(raw: &str, clause: &str, context: &str) -> Result<Clause> {
    let clause = clause.trim();
    if clause.is_empty() {
        return Err(XcversionError::invalid_requirement(
            raw,
            context,
            "empty clause",
        ));
    }

    let caps = RE_CLAUSE
        .captures(clause)
        .ok_or_else(|| XcversionError::invalid_requirement(raw, clause, "malformed clause"))?;
    let op_token = &caps["op"];
    let version_text = &caps["version"];

    let op = if op_token.is_empty() {
        Operator::Pessimistic
    } else {
        op_token
            .parse::<Operator>()
            .map_err(|reason| XcversionError::invalid_requirement(raw, op_token, reason))?
    };

    if version_text.starts_with(Operator::is_operator_char) {
        return Err(XcversionError::invalid_requirement(
            raw,
            clause,
            "malformed operator",
        ));
    }

    let version = version_text
        .parse::<Version>()
        .map_err(|e| XcversionError::invalid_requirement(raw, clause, e.reason))?;

    Ok(Clause { op, version })
}

// src/requirement.rs
//! Lexical extraction of package names from `requires_dist` entries.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DepGraphError, Result};

/// Leading name token of a requirement specifier.
pub const NAME_PATTERN: &str = r"^[a-zA-Z0-9_-]+";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

/// Parses a single requirement as written in the `requires_dist` field and
/// returns the leading package name.
///
/// Version constraints, environment markers and extras are discarded. The
/// name is returned with its original casing.
///
/// ```
/// use depgraph_core::requirement::parse_req;
/// assert_eq!(parse_req("asgiref (>=3.2) ; extra == 'async'").unwrap(), "asgiref");
/// ```
///
/// # Errors
/// Returns `InvalidRequirement` if the string is empty or does not start
/// with a name character.
pub fn parse_req(requirement: &str) -> Result<&str> {
    if requirement.is_empty() {
        return Err(invalid(requirement, "requirement must be a non-empty string"));
    }

    NAME_RE
        .find(requirement)
        .map(|m| m.as_str())
        .ok_or_else(|| invalid(requirement, "requirement does not start with a package name"))
}

fn invalid(requirement: &str, reason: &'static str) -> DepGraphError {
    DepGraphError::InvalidRequirement {
        requirement: requirement.to_string(),
        reason,
    }
}

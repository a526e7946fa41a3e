// src/naming.rs
//! Package name comparison policy.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How package names from requirements are matched against the top set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NameMatching {
    /// Byte-for-byte comparison. `Django` and `django` are different nodes.
    #[default]
    Exact,
    /// PEP 503 canonical names: lowercase, runs of `-`, `_` and `.` become `-`.
    Pep503,
}

impl NameMatching {
    /// Returns the key used for lookups and node identity.
    #[must_use]
    pub fn key<'a>(self, name: &'a str) -> Cow<'a, str> {
        match self {
            Self::Exact => Cow::Borrowed(name),
            Self::Pep503 => canonicalize(name),
        }
    }
}

/// Canonicalizes a name per PEP 503. Borrows when the name is already canonical.
#[must_use]
pub fn canonicalize(name: &str) -> Cow<'_, str> {
    if is_canonical(name) {
        return Cow::Borrowed(name);
    }

    let mut out = String::with_capacity(name.len());
    let mut in_separator = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_separator {
                out.push('-');
            }
            in_separator = true;
        } else {
            out.extend(c.to_lowercase());
            in_separator = false;
        }
    }
    Cow::Owned(out)
}

fn is_canonical(name: &str) -> bool {
    let mut prev_dash = false;
    for c in name.chars() {
        let lowered = c.to_lowercase().eq(std::iter::once(c));
        if !lowered || c == '_' || c == '.' || (c == '-' && prev_dash) {
            return false;
        }
        prev_dash = c == '-';
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("Foo_Bar"), "foo-bar");
        assert_eq!(canonicalize("zope.interface"), "zope-interface");
        assert_eq!(canonicalize("a-_.b"), "a-b");
        assert!(matches!(canonicalize("already-fine"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_titlecase_is_lowercased() {
        assert_eq!(canonicalize("\u{1C5}emal"), "\u{1C6}emal");
        assert_eq!(NameMatching::Pep503.key("\u{1C5}"), "\u{1C6}");
    }

    #[test]
    fn test_exact_keeps_case() {
        assert_eq!(NameMatching::Exact.key("PyYAML"), "PyYAML");
        assert_eq!(NameMatching::Pep503.key("PyYAML"), "pyyaml");
    }
}

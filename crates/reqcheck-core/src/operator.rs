//! Comparison operators and their translation into version sets.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Serialize, Serializer};
use tracing::debug;

use reqcheck_util::errors::ReqcheckError;

use crate::span::{Lower, Upper, VersionSpan};
use crate::triple::VersionTriple;
use crate::version_set::{DisjointVersionSpan, FixedVersion, VersionSet};

/// A PEP 440 version comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionOperator {
    /// `~=`
    Compatible,
    /// `==`
    Matching,
    /// `!=`
    Excluding,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `===`
    Identical,
}

static OPERATORS: LazyLock<HashMap<&'static str, VersionOperator>> = LazyLock::new(|| {
    VersionOperator::ALL
        .iter()
        .map(|op| (op.as_str(), *op))
        .collect()
});

impl VersionOperator {
    pub const ALL: [VersionOperator; 8] = [
        Self::Compatible,
        Self::Matching,
        Self::Excluding,
        Self::LessEqual,
        Self::GreaterEqual,
        Self::Less,
        Self::Greater,
        Self::Identical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compatible => "~=",
            Self::Matching => "==",
            Self::Excluding => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Identical => "===",
        }
    }

    /// Translate `self version` into the set of versions it admits.
    pub fn version_set(&self, version: &str) -> Result<VersionSet, ReqcheckError> {
        let set = match self {
            Self::Identical => VersionSet::Fixed(FixedVersion::new(version)),
            Self::Compatible => {
                let lower = VersionTriple::parse(version)?;
                let upper = lower.bump_compatible()?;
                VersionSet::Span(VersionSpan::new(Lower::new(lower), Upper::new(upper))?)
            }
            Self::Matching => {
                let lower = VersionTriple::parse(version)?;
                VersionSet::Span(VersionSpan::new(Lower::new(lower), Upper::new(lower.bump()))?)
            }
            Self::Excluding => {
                let excluded = VersionTriple::parse(version)?;
                let below = VersionSpan::new(Lower::unbounded(), Upper::new(excluded))?;
                let above = VersionSpan::new(Lower::new(excluded.bump()), Upper::unbounded())?;
                VersionSet::Disjoint(DisjointVersionSpan::new(vec![below, above]))
            }
            Self::LessEqual => {
                let upper = VersionTriple::parse(version)?.bump();
                VersionSet::Span(VersionSpan::new(Lower::unbounded(), Upper::new(upper))?)
            }
            Self::GreaterEqual => {
                let lower = VersionTriple::parse(version)?;
                VersionSet::Span(VersionSpan::new(Lower::new(lower), Upper::unbounded())?)
            }
            Self::Less => {
                let upper = VersionTriple::parse(version)?;
                VersionSet::Span(VersionSpan::new(Lower::unbounded(), Upper::new(upper))?)
            }
            Self::Greater => {
                let lower = VersionTriple::parse(version)?.bump();
                VersionSet::Span(VersionSpan::new(Lower::new(lower), Upper::unbounded())?)
            }
        };
        debug!("{self}{version} -> {set}");
        Ok(set)
    }
}

impl Serialize for VersionOperator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for VersionOperator {
    type Err = ReqcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OPERATORS
            .get(s)
            .copied()
            .ok_or_else(|| ReqcheckError::parse(format!("unknown version operator: {s}")))
    }
}

impl fmt::Display for VersionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translate an operator token and version into a version set.
pub fn version_set(operator: &str, version: &str) -> Result<VersionSet, ReqcheckError> {
    operator.parse::<VersionOperator>()?.version_set(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> VersionTriple {
        VersionTriple::parse(s).unwrap()
    }

    fn span_of(set: VersionSet) -> VersionSpan {
        match set {
            VersionSet::Span(span) => span,
            other => panic!("expected a span, got {other}"),
        }
    }

    #[test]
    fn lookup_table_round_trips() {
        for op in VersionOperator::ALL {
            assert_eq!(op.as_str().parse::<VersionOperator>().unwrap(), op);
        }
    }

    #[test]
    fn unknown_operator_is_a_parse_error() {
        let err = "=>".parse::<VersionOperator>().unwrap_err();
        assert!(matches!(err, ReqcheckError::Parse { .. }));
        assert!(err.to_string().contains("unknown version operator: =>"));
    }

    #[test]
    fn compatible_with_patch_bumps_minor() {
        let span = span_of(version_set("~=", "1.4.2").unwrap());
        assert_eq!(span.lower().version(), Some(&v("1.4.2")));
        assert_eq!(span.upper().version(), Some(&v("1.5.0")));
    }

    #[test]
    fn compatible_without_patch_bumps_major() {
        let span = span_of(version_set("~=", "2.2").unwrap());
        assert_eq!(span.upper().version(), Some(&v("3.0")));
    }

    #[test]
    fn compatible_without_patch_excludes_next_major() {
        let span = span_of(version_set("~=", "1.4").unwrap());
        assert!(span.contains(&v("1.9.9")));
        assert!(!span.contains(&v("2.0")));
    }

    #[test]
    fn compatible_major_only_fails() {
        assert!(version_set("~=", "1").is_err());
    }

    #[test]
    fn matching_is_a_prefix_range() {
        let span = span_of(version_set("==", "1.0").unwrap());
        assert!(span.contains(&v("1.0")));
        assert!(span.contains(&v("1.0.5")));
        assert!(!span.contains(&v("1.1")));
    }

    #[test]
    fn matching_wildcard() {
        let span = span_of(version_set("==", "1.0.*").unwrap());
        assert_eq!(span.to_string(), "[1.0, 1.1)");
    }

    #[test]
    fn excluding_splits_into_two_spans() {
        let set = version_set("!=", "1.0").unwrap();
        assert_eq!(set.to_string(), "(-inf, 1.0) | [1.1, +inf)");
    }

    #[test]
    fn inequality_operators() {
        assert_eq!(version_set("<=", "2.0").unwrap().to_string(), "(-inf, 2.1)");
        assert_eq!(version_set(">=", "2.0").unwrap().to_string(), "[2.0, +inf)");
        assert_eq!(version_set("<", "2.10").unwrap().to_string(), "(-inf, 2.10)");
        assert_eq!(
            version_set(">", "2.28.0").unwrap().to_string(),
            "[2.28.1, +inf)"
        );
    }

    #[test]
    fn identical_keeps_the_raw_string() {
        assert_eq!(
            version_set("===", "1.0+local").unwrap(),
            VersionSet::Fixed(FixedVersion::new("1.0+local"))
        );
    }

    #[test]
    fn unparseable_version_is_a_parse_error() {
        let err = version_set(">=", "latest").unwrap_err();
        assert!(matches!(err, ReqcheckError::Parse { .. }));
    }
}

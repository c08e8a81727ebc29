//! Numeric release triples.
//!
//! A version is parsed as PEP 440 and reduced to `major[.minor[.patch]]`.
//! Epochs are rejected and any pre/post/dev/local segment is dropped, so
//! `1.0.post1` and `1.0` parse to the same triple. This is a lossy
//! approximation of PEP 440 ordering, not a general version comparator.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use pep440_rs::Version;

use reqcheck_util::errors::ReqcheckError;

/// A release triple with optional minor and patch components.
///
/// Comparison treats an unset component as `0`, so `1.0` and `1.0.0` compare
/// equal. Which components were given only matters for [`bump`](Self::bump).
#[derive(Debug, Clone, Copy)]
pub struct VersionTriple {
    major: u64,
    minor: Option<u64>,
    patch: Option<u64>,
}

impl VersionTriple {
    /// Build a triple, rejecting a patch component without a minor one.
    pub fn new(major: u64, minor: Option<u64>, patch: Option<u64>) -> Result<Self, ReqcheckError> {
        if minor.is_none() && patch.is_some() {
            return Err(ReqcheckError::invariant(
                "minor version must be set if patch version is set",
            ));
        }
        Ok(Self {
            major,
            minor,
            patch,
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> Option<u64> {
        self.minor
    }

    pub fn patch(&self) -> Option<u64> {
        self.patch
    }

    /// Parse a PEP 440 version and keep its release segment.
    ///
    /// A trailing `.*` wildcard is stripped, so `1.0.*` yields `1.0`.
    pub fn parse(version: &str) -> Result<Self, ReqcheckError> {
        let trimmed = version.trim();
        let stripped = trimmed.strip_suffix(".*").unwrap_or(trimmed);
        let parsed = Version::from_str(stripped)
            .map_err(|err| ReqcheckError::parse(format!("invalid version '{version}': {err}")))?;

        if parsed.epoch() != 0 {
            return Err(ReqcheckError::parse(format!(
                "version epochs are not supported: {version}"
            )));
        }
        let release = parsed.release();
        if release.iter().any(|n| *n == u64::MAX) {
            return Err(ReqcheckError::parse(format!(
                "version component out of range in '{version}'"
            )));
        }

        match release[..] {
            [major] => Self::new(major, None, None),
            [major, minor] => Self::new(major, Some(minor), None),
            [major, minor, patch] => Self::new(major, Some(minor), Some(patch)),
            _ => Err(ReqcheckError::parse(format!(
                "at most three release components are supported, got '{version}'"
            ))),
        }
    }

    /// Increment the least significant component that was explicitly given.
    ///
    /// Turns an inclusive upper bound into the adjacent exclusive one, and an
    /// exclusive lower bound into the adjacent inclusive one.
    pub fn bump(&self) -> Self {
        match (self.minor, self.patch) {
            (Some(minor), Some(patch)) => Self {
                major: self.major,
                minor: Some(minor),
                patch: Some(patch.saturating_add(1)),
            },
            (Some(minor), None) => Self {
                major: self.major,
                minor: Some(minor.saturating_add(1)),
                patch: None,
            },
            _ => Self {
                major: self.major.saturating_add(1),
                minor: None,
                patch: None,
            },
        }
    }

    /// Upper bound of a compatible release (`~=`).
    ///
    /// `~=X.Y` allows everything below `X+1`; `~=X.Y.Z` allows everything
    /// below `X.(Y+1)`. A major-only version has no compatible release.
    pub fn bump_compatible(&self) -> Result<Self, ReqcheckError> {
        let minor = self.minor.ok_or_else(|| {
            ReqcheckError::parse(format!(
                "~= cannot apply to a major-only version ({self})"
            ))
        })?;
        match self.patch {
            None => Ok(Self {
                major: self.major.saturating_add(1),
                minor: Some(0),
                patch: None,
            }),
            Some(_) => Ok(Self {
                major: self.major,
                minor: Some(minor.saturating_add(1)),
                patch: None,
            }),
        }
    }

    fn key(&self) -> (u64, u64, u64) {
        (
            self.major,
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0),
        )
    }
}

impl PartialEq for VersionTriple {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionTriple {}

impl Ord for VersionTriple {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for VersionTriple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{minor}")?;
        }
        if let Some(patch) = self.patch {
            write!(f, ".{patch}")?;
        }
        Ok(())
    }
}

impl FromStr for VersionTriple {
    type Err = ReqcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

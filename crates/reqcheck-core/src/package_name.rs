use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use reqcheck_util::errors::ReqcheckError;

/// A validated, normalized package name.
///
/// Normalization lowercases ASCII letters and collapses runs of `-`, `_` and
/// `.` into a single `-`, so `Foo_Bar` and `foo-bar` name the same package.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageName(pep508_rs::PackageName);

impl PackageName {
    pub fn new(name: &str) -> Result<Self, ReqcheckError> {
        pep508_rs::PackageName::from_str(name)
            .map(Self)
            .map_err(|err| ReqcheckError::parse(err.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<pep508_rs::PackageName> for PackageName {
    fn from(name: pep508_rs::PackageName) -> Self {
        Self(name)
    }
}

impl FromStr for PackageName {
    type Err = ReqcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for PackageName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

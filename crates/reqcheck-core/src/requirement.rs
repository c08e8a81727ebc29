//! PEP 508 requirement strings and requirements files.
//!
//! Requirements are parsed with `pep508_rs` and reduced to the parts the
//! consistency check needs. Markers and URLs are kept as text and never
//! evaluated.

use std::fmt;
use std::str::FromStr;

use pep440_rs::{Operator, VersionSpecifier};
use pep508_rs::VersionOrUrl;
use serde::Serialize;

use reqcheck_util::errors::ReqcheckError;

use crate::operator::VersionOperator;
use crate::package_name::PackageName;
use crate::version_set::VersionSet;

/// A single `operator version` clause, e.g. `>=1.20`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Specifier {
    operator: VersionOperator,
    version: String,
}

impl Specifier {
    pub fn new(operator: VersionOperator, version: impl Into<String>) -> Self {
        Self {
            operator,
            version: version.into(),
        }
    }

    pub fn parse(clause: &str) -> Result<Self, ReqcheckError> {
        let clause = clause.trim();
        let specifier = VersionSpecifier::from_str(clause).map_err(|err| {
            ReqcheckError::parse(format!("invalid version specifier '{clause}': {err}"))
        })?;
        Self::from_pep440(&specifier)
    }

    fn from_pep440(specifier: &VersionSpecifier) -> Result<Self, ReqcheckError> {
        // `Operator` prints the star variants without their `.*`.
        let operator: VersionOperator = specifier.operator().to_string().parse()?;
        let mut version = specifier.version().to_string();
        if matches!(
            specifier.operator(),
            Operator::EqualStar | Operator::NotEqualStar
        ) {
            version.push_str(".*");
        }
        Ok(Self::new(operator, version))
    }

    pub fn operator(&self) -> VersionOperator {
        self.operator
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The versions admitted by this clause alone.
    pub fn version_set(&self) -> Result<VersionSet, ReqcheckError> {
        self.operator.version_set(&self.version)
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

/// A parsed requirement such as `requests[socks]>=2.28,<3; python_version>"3.8"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub name: PackageName,
    pub extras: Vec<String>,
    pub specifiers: Vec<Specifier>,
    pub url: Option<String>,
    pub marker: Option<String>,
}

impl Requirement {
    pub fn parse(input: &str) -> Result<Self, ReqcheckError> {
        let input = input.trim();
        let parsed: pep508_rs::Requirement = input
            .parse()
            .map_err(|err| ReqcheckError::parse(format!("invalid requirement '{input}': {err}")))?;

        let (specifiers, url) = match parsed.version_or_url {
            None => (Vec::new(), None),
            Some(VersionOrUrl::VersionSpecifier(specifiers)) => (
                specifiers
                    .iter()
                    .map(Specifier::from_pep440)
                    .collect::<Result<Vec<_>, _>>()?,
                None,
            ),
            Some(VersionOrUrl::Url(url)) => (Vec::new(), Some(url.to_string())),
        };

        Ok(Self {
            name: PackageName::from(parsed.name),
            extras: parsed.extras.iter().map(ToString::to_string).collect(),
            specifiers,
            url,
            marker: parsed.marker.contents().map(|marker| marker.to_string()),
        })
    }

    /// Whether the requirement constrains the version at all.
    pub fn is_pinned(&self) -> bool {
        !self.specifiers.is_empty()
    }
}

impl FromStr for Requirement {
    type Err = ReqcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.extras.is_empty() {
            write!(f, "[{}]", self.extras.join(","))?;
        }
        for (i, spec) in self.specifiers.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{spec}")?;
        }
        if let Some(url) = &self.url {
            write!(f, " @ {url}")?;
        }
        if let Some(marker) = &self.marker {
            write!(f, "; {marker}")?;
        }
        Ok(())
    }
}

/// Parse the contents of a requirements file.
///
/// One requirement per line. Blank lines and `#` comments are skipped, a
/// trailing `\` joins the next line, and option lines such as `-r other.txt`
/// are rejected.
pub fn parse_requirements_txt(content: &str, source: &str) -> Result<Vec<Requirement>, ReqcheckError> {
    let mut requirements = Vec::new();
    let mut pending = String::new();
    let mut start_line = 0;

    for (idx, raw) in content.lines().enumerate() {
        if pending.is_empty() {
            start_line = idx + 1;
        }
        let line = strip_comment(raw);
        if let Some(continued) = line.strip_suffix('\\') {
            pending.push_str(continued);
            pending.push(' ');
            continue;
        }
        pending.push_str(line);

        let entry = pending.trim();
        if entry.starts_with('-') {
            return Err(ReqcheckError::parse(format!(
                "{source}:{start_line}: requirement file options are not supported: '{entry}'"
            )));
        }
        if !entry.is_empty() {
            let requirement =
                Requirement::parse(entry).map_err(|e| located(source, start_line, e))?;
            requirements.push(requirement);
        }
        pending.clear();
    }

    let entry = pending.trim();
    if !entry.is_empty() {
        let requirement = Requirement::parse(entry).map_err(|e| located(source, start_line, e))?;
        requirements.push(requirement);
    }
    Ok(requirements)
}

fn located(source: &str, line: usize, err: ReqcheckError) -> ReqcheckError {
    let message = match err {
        ReqcheckError::Parse { message } => message,
        other => other.to_string(),
    };
    ReqcheckError::parse(format!("{source}:{line}: {message}"))
}

fn strip_comment(line: &str) -> &str {
    let trimmed = line.trim_end();
    if trimmed.trim_start().starts_with('#') {
        return "";
    }
    match trimmed.find(" #").or_else(|| trimmed.find("\t#")) {
        Some(idx) => trimmed[..idx].trim_end(),
        None => trimmed,
    }
}

//! Grouping and folding of requirement clauses.
//!
//! Every clause is translated to a [`VersionSet`] before anything is folded,
//! so a malformed clause aborts the whole check. Clauses are then grouped by
//! normalized package name and intersected, starting from the unbounded set.
//! A package conflicts when its fold is empty; all conflicts are collected.

use std::collections::HashMap;
use std::fmt::Display;

use serde::{Serialize, Serializer};
use tracing::{debug, info, warn};

use reqcheck_core::package_name::PackageName;
use reqcheck_core::requirement::{Requirement, Specifier};
use reqcheck_core::version_set::{SpanDisjointStrategy, VersionSet};
use reqcheck_util::errors::ReqcheckError;

use crate::conflict::{ConflictReport, VersionConflict};

/// All clauses for one package and the set they admit together.
#[derive(Debug, Clone, Serialize)]
pub struct PackageConstraints {
    pub name: PackageName,
    pub specifiers: Vec<Specifier>,
    #[serde(serialize_with = "serialize_display")]
    pub folded: VersionSet,
}

impl PackageConstraints {
    fn new(name: PackageName) -> Self {
        Self {
            name,
            specifiers: Vec::new(),
            folded: VersionSet::unbounded(),
        }
    }

    pub fn is_conflicting(&self) -> bool {
        self.folded.is_empty()
    }

    pub fn is_pinned(&self) -> bool {
        !self.specifiers.is_empty()
    }
}

fn serialize_display<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Per-package outcome of a consistency check, in first-seen order.
#[derive(Debug, Clone, Serialize)]
pub struct ConsistencyReport {
    packages: Vec<PackageConstraints>,
}

impl ConsistencyReport {
    pub fn packages(&self) -> &[PackageConstraints] {
        &self.packages
    }

    pub fn get(&self, name: &PackageName) -> Option<&PackageConstraints> {
        self.packages.iter().find(|p| &p.name == name)
    }

    pub fn is_consistent(&self) -> bool {
        !self.packages.iter().any(PackageConstraints::is_conflicting)
    }

    /// Packages named without any version clause.
    pub fn unpinned(&self) -> impl Iterator<Item = &PackageName> {
        self.packages
            .iter()
            .filter(|p| !p.is_pinned())
            .map(|p| &p.name)
    }

    pub fn conflicts(&self) -> ConflictReport {
        let mut report = ConflictReport::new();
        for package in self.packages.iter().filter(|p| p.is_conflicting()) {
            report.add(VersionConflict {
                package: package.name.to_string(),
                specifiers: package.specifiers.iter().map(ToString::to_string).collect(),
            });
        }
        report
    }

    pub fn into_result(self) -> Result<(), ReqcheckError> {
        self.conflicts().into_result()
    }
}

/// Folds requirement clauses per package.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsistencyChecker {
    strategy: SpanDisjointStrategy,
}

impl ConsistencyChecker {
    pub fn new(strategy: SpanDisjointStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> SpanDisjointStrategy {
        self.strategy
    }

    pub fn analyze(&self, requirements: &[Requirement]) -> Result<ConsistencyReport, ReqcheckError> {
        let mut packages: Vec<PackageConstraints> = Vec::new();
        let mut index: HashMap<PackageName, usize> = HashMap::new();
        let mut translated: Vec<(usize, VersionSet)> = Vec::new();

        for requirement in requirements {
            let slot = *index.entry(requirement.name.clone()).or_insert_with(|| {
                packages.push(PackageConstraints::new(requirement.name.clone()));
                packages.len() - 1
            });
            for specifier in &requirement.specifiers {
                translated.push((slot, specifier.version_set()?));
                packages[slot].specifiers.push(specifier.clone());
            }
        }

        for (slot, set) in translated {
            let package = &mut packages[slot];
            package.folded = package.folded.intersect_with(&set, self.strategy)?;
        }

        for package in &packages {
            if !package.is_pinned() {
                info!(
                    "{} has no version specifier; it is recommended to pin the version of the package",
                    package.name
                );
            } else if package.is_conflicting() {
                warn!("{}: no version satisfies all of its constraints", package.name);
            } else {
                debug!("{} -> {}", package.name, package.folded);
            }
        }

        Ok(ConsistencyReport { packages })
    }

    /// `Ok(())` if every package is satisfiable.
    pub fn check(&self, requirements: &[Requirement]) -> Result<(), ReqcheckError> {
        self.analyze(requirements)?.into_result()
    }
}

/// Parse requirement strings and check that each package is satisfiable.
///
/// Fails with [`ReqcheckError::Parse`] on the first malformed string, or with
/// [`ReqcheckError::Conflict`] listing every unsatisfiable package.
pub fn consistency_check<S: AsRef<str>>(requirements: &[S]) -> Result<(), ReqcheckError> {
    let parsed = requirements
        .iter()
        .map(|r| Requirement::parse(r.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    ConsistencyChecker::default().check(&parsed)
}

//! Version conflict reporting.

use std::fmt;

use serde::Serialize;

use reqcheck_util::errors::ReqcheckError;

/// Every package whose combined constraints admit no version.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ConflictReport {
    pub conflicts: Vec<VersionConflict>,
}

/// A package whose clauses intersect to the empty set.
#[derive(Debug, Clone, Serialize)]
pub struct VersionConflict {
    pub package: String,
    /// The clauses that were combined, in input order.
    pub specifiers: Vec<String>,
}

impl VersionConflict {
    /// The clauses joined as `>2.28.0, <2.10`.
    pub fn constraint(&self) -> String {
        self.specifiers.join(", ")
    }
}

impl ConflictReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, conflict: VersionConflict) {
        self.conflicts.push(conflict);
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    /// `Ok(())` when there are no conflicts, otherwise a
    /// [`ReqcheckError::Conflict`] naming every conflicting package.
    pub fn into_result(self) -> Result<(), ReqcheckError> {
        if self.is_empty() {
            return Ok(());
        }
        Err(ReqcheckError::Conflict {
            conflicts: self
                .conflicts
                .iter()
                .map(|c| (c.package.clone(), c.constraint()))
                .collect(),
        })
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conflicts.is_empty() {
            return write!(f, "No version conflicts.");
        }
        writeln!(f, "Version conflicts ({}):", self.conflicts.len())?;
        for c in &self.conflicts {
            writeln!(f, "  {c}")?;
        }
        Ok(())
    }
}

impl fmt::Display for VersionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: no version satisfies {}", self.package, self.constraint())
    }
}

//! Consistency checking: groups requirement clauses by package name, folds
//! their version sets by intersection, and reports every package left with
//! no satisfying version.

pub mod conflict;
pub mod consistency;

pub use consistency::{consistency_check, ConsistencyChecker, ConsistencyReport};

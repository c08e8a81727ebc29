//! Version-constraint algebra for reqcheck.
//!
//! This crate turns PEP 508 requirement strings into sets of versions and
//! intersects them: numeric release triples, half-open spans and their bounds,
//! the [`VersionSet`](version_set::VersionSet) union type, the operator table,
//! package-name normalization, and configuration.
//!
//! Everything here is pure and synchronous. Values are immutable once built.

pub mod config;
pub mod operator;
pub mod package_name;
pub mod requirement;
pub mod span;
pub mod triple;
pub mod version_set;

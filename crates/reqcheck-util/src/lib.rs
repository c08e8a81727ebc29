//! Shared utilities for reqcheck.
//!
//! This crate provides cross-cutting concerns used by all other reqcheck crates:
//! the unified error type, filesystem helpers, and Cargo-style terminal status
//! lines.

pub mod errors;
pub mod fs;
pub mod progress;

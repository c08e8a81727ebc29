//! Operation: print the version set each package folds down to.

use std::path::Path;

use reqcheck_util::errors::ReqcheckResult;

use crate::ops_check::print_json;
use crate::ops_setup::{collect_requirements, resolve_settings};
use crate::{CheckOptions, OutputFormat};

/// Print every package with its clauses and the versions they admit together.
///
/// Unlike [`crate::ops_check::check`] this succeeds even when packages
/// conflict; conflicts are marked in the output.
pub fn explain(cwd: &Path, options: &CheckOptions) -> ReqcheckResult<()> {
    let settings = resolve_settings(cwd, options)?;
    let requirements = collect_requirements(cwd, options)?;
    let report = settings.checker.analyze(&requirements)?;

    if options.format == OutputFormat::Json {
        return print_json(&report);
    }

    let width = report
        .packages()
        .iter()
        .map(|p| p.name.as_str().len())
        .max()
        .unwrap_or(0);

    for package in report.packages() {
        let clauses = if package.is_pinned() {
            package
                .specifiers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            "(any)".to_string()
        };
        let marker = if package.is_conflicting() {
            "  unsatisfiable"
        } else {
            ""
        };
        println!(
            "{:<width$}  {clauses}  ->  {}{marker}",
            package.name.as_str(),
            package.folded,
        );
    }
    Ok(())
}

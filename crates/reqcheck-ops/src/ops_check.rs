//! Operation: verify that every package's requirements can be satisfied.
//!
//! Collects requirements, folds them per package, and fails with a
//! diagnostic naming every conflicting package. Packages without any version
//! clause are reported as unpinned unless disabled.

use std::path::Path;

use serde::Serialize;

use reqcheck_resolver::conflict::VersionConflict;
use reqcheck_resolver::ConsistencyReport;
use reqcheck_util::errors::{ReqcheckError, ReqcheckResult};
use reqcheck_util::progress;

use crate::ops_setup::{collect_requirements, resolve_settings};
use crate::{CheckOptions, OutputFormat};

/// Check the requirements described by `options`.
pub fn check(cwd: &Path, options: &CheckOptions) -> ReqcheckResult<()> {
    let settings = resolve_settings(cwd, options)?;
    let requirements = collect_requirements(cwd, options)?;

    if options.format == OutputFormat::Text {
        progress::status(
            "Checking",
            &format!(
                "{} requirement{}",
                requirements.len(),
                if requirements.len() == 1 { "" } else { "s" }
            ),
        );
        if options.verbose {
            progress::status_info("Strategy", settings.checker.strategy().as_str());
        }
    }

    let report = settings.checker.analyze(&requirements)?;

    match options.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_text(&report, settings.warn_unpinned, options.verbose),
    }

    report.into_result().map_err(Into::into)
}

fn print_text(report: &ConsistencyReport, warn_unpinned: bool, verbose: bool) {
    if warn_unpinned {
        for name in report.unpinned() {
            progress::status_warn(
                "Unpinned",
                &format!("{name} (it is recommended to pin the version of the package)"),
            );
        }
    }
    if verbose {
        for package in report.packages().iter().filter(|p| p.is_pinned()) {
            progress::status_info("Resolved", &format!("{} {}", package.name, package.folded));
        }
    }
    let conflicts = report.conflicts();
    for conflict in &conflicts.conflicts {
        progress::status_error("Conflict", &conflict.to_string());
    }
    if conflicts.is_empty() {
        let count = report.packages().len();
        progress::status(
            "Consistent",
            &format!("{count} package{}", if count == 1 { "" } else { "s" }),
        );
    }
}

pub(crate) fn print_json(report: &ConsistencyReport) -> ReqcheckResult<()> {
    let rendered = serde_json::to_string_pretty(&JsonReport {
        consistent: report.is_consistent(),
        conflicts: report.conflicts().conflicts,
        report,
    })
    .map_err(|e| ReqcheckError::Generic {
        message: format!("Failed to serialize report: {e}"),
    })?;
    println!("{rendered}");
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    consistent: bool,
    conflicts: Vec<VersionConflict>,
    #[serde(flatten)]
    report: &'a ConsistencyReport,
}

//! Input collection and settings resolution shared by `check` and `explain`.

use std::path::Path;

use reqcheck_core::config::GlobalConfig;
use reqcheck_core::requirement::{parse_requirements_txt, Requirement};
use reqcheck_core::version_set::SpanDisjointStrategy;
use reqcheck_resolver::ConsistencyChecker;
use reqcheck_util::errors::ReqcheckError;

use crate::CheckOptions;

/// Effective settings after merging config files with command-line overrides.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub checker: ConsistencyChecker,
    pub warn_unpinned: bool,
}

/// Load configuration for `cwd` and apply overrides from `options`.
pub fn resolve_settings(cwd: &Path, options: &CheckOptions) -> Result<Settings, ReqcheckError> {
    let config = match &options.config {
        Some(path) => GlobalConfig::load_from(&cwd.join(path))?,
        None => GlobalConfig::load(cwd)?,
    };

    let strategy = match options.strategy.as_deref() {
        Some(s) => SpanDisjointStrategy::parse(s).ok_or_else(|| ReqcheckError::Config {
            message: format!("Unknown span-disjoint strategy '{s}' (expected exhaustive or first-match)"),
        })?,
        None => config.check.span_disjoint,
    };

    Ok(Settings {
        checker: ConsistencyChecker::new(strategy),
        warn_unpinned: options.warn_unpinned.unwrap_or(config.check.warn_unpinned),
    })
}

/// Parse command-line requirements followed by each requirements file.
///
/// Relative file paths are resolved against `cwd`. The first malformed entry
/// aborts collection.
pub fn collect_requirements(cwd: &Path, options: &CheckOptions) -> Result<Vec<Requirement>, ReqcheckError> {
    let mut requirements = options
        .requirements
        .iter()
        .map(|r| Requirement::parse(r))
        .collect::<Result<Vec<_>, _>>()?;

    for file in &options.files {
        let path = cwd.join(file);
        let content = reqcheck_util::fs::read_to_string(&path)?;
        requirements.extend(parse_requirements_txt(&content, &file.display().to_string())?);
    }

    if requirements.is_empty() {
        return Err(ReqcheckError::Generic {
            message: "No requirements given; pass requirement strings or -r <FILE>".to_string(),
        });
    }
    tracing::debug!("collected {} requirements", requirements.len());
    Ok(requirements)
}

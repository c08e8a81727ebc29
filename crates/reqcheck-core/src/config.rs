use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use reqcheck_util::errors::ReqcheckError;
use reqcheck_util::fs::find_ancestor_with;

use crate::version_set::SpanDisjointStrategy;

/// Name of the project-level configuration file.
pub const PROJECT_CONFIG_FILE: &str = "reqcheck.toml";

/// Configuration loaded from `reqcheck.toml` or `~/.reqcheck/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub check: CheckConfig,
}

/// Consistency-check settings from `[check]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    #[serde(default, rename = "span-disjoint")]
    pub span_disjoint: SpanDisjointStrategy,
    #[serde(default = "default_warn_unpinned", rename = "warn-unpinned")]
    pub warn_unpinned: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            span_disjoint: SpanDisjointStrategy::default(),
            warn_unpinned: default_warn_unpinned(),
        }
    }
}

fn default_warn_unpinned() -> bool {
    true
}

impl GlobalConfig {
    /// Resolve the configuration for a run started in `cwd`.
    ///
    /// Looks for `reqcheck.toml` in `cwd` and its ancestors, then
    /// `~/.reqcheck/config.toml`, and falls back to defaults.
    pub fn load(cwd: &Path) -> Result<Self, ReqcheckError> {
        if let Some(dir) = find_ancestor_with(cwd, PROJECT_CONFIG_FILE) {
            return Self::load_from(&dir.join(PROJECT_CONFIG_FILE));
        }
        let path = Self::default_path();
        if path.is_file() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ReqcheckError> {
        let content = std::fs::read_to_string(path).map_err(|e| ReqcheckError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ReqcheckError::Config {
            message: format!("Failed to parse {}: {e}", path.display()),
        })?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the reqcheck data directory (`~/.reqcheck/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".reqcheck")
}

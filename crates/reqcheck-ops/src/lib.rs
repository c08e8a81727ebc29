pub mod ops_check;
pub mod ops_explain;
pub mod ops_setup;

use std::path::PathBuf;

/// How results are printed to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Inputs shared by `check` and `explain`.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Requirement strings given directly on the command line.
    pub requirements: Vec<String>,
    /// Requirements files (`-r`).
    pub files: Vec<PathBuf>,
    /// Explicit config file; otherwise discovered from the working directory.
    pub config: Option<PathBuf>,
    /// Overrides `[check].span-disjoint`.
    pub strategy: Option<String>,
    /// Set to `false` to silence the unpinned-package warning.
    pub warn_unpinned: Option<bool>,
    pub format: OutputFormat,
    pub verbose: bool,
}

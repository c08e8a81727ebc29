use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all reqcheck operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ReqcheckError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable configuration file.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check your reqcheck.toml or ~/.reqcheck/config.toml for syntax errors"))]
    Config { message: String },

    /// Malformed requirement string, unparseable version, or unknown operator.
    #[error("Parse error: {message}")]
    #[diagnostic(help("Requirements use PEP 508 syntax, e.g. `numpy>=1.20,<2`"))]
    Parse { message: String },

    /// An internal invariant of the version algebra was violated.
    #[error("Invariant violation: {message}")]
    Invariant { message: String },

    /// One or more packages have unsatisfiable combined constraints.
    ///
    /// Each entry is `(package, constraint)`.
    #[error("Inconsistent package specifiers: {}", format_conflicts(.conflicts))]
    #[diagnostic(help("No single version satisfies all constraints listed for these packages"))]
    Conflict { conflicts: Vec<(String, String)> },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

impl ReqcheckError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant {
            message: message.into(),
        }
    }
}

fn format_conflicts(conflicts: &[(String, String)]) -> String {
    conflicts
        .iter()
        .map(|(package, constraint)| format!("{package} ({constraint})"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience alias for `miette::Result<T>`.
pub type ReqcheckResult<T> = miette::Result<T>;

//! CLI argument definitions for reqcheck.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "reqcheck",
    version,
    about = "Check that Python package requirements can be satisfied together",
    long_about = "reqcheck combines every version clause given for each package and reports \
                  the packages for which no single version satisfies all of them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (default: nearest reqcheck.toml, then ~/.reqcheck/config.toml)
    #[arg(long, global = true, env = "REQCHECK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fail if any package's requirements cannot be satisfied together
    Check {
        #[command(flatten)]
        input: InputArgs,
        /// Do not warn about packages without a version specifier
        #[arg(long)]
        no_warn_unpinned: bool,
    },

    /// Print the versions each package's requirements admit together
    Explain {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Requirement strings, e.g. "numpy>=1.20,<2"
    pub requirements: Vec<String>,
    /// Read requirements from a file (repeatable)
    #[arg(short = 'r', long = "requirement", value_name = "FILE")]
    pub files: Vec<PathBuf>,
    /// How a span is intersected with an exclusion union: exhaustive, first-match
    #[arg(long)]
    pub strategy: Option<String>,
    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn parse() -> Cli {
    Cli::parse()
}

//! Command dispatch and handler modules.

mod check;
mod explain;

use miette::Result;

use reqcheck_ops::{CheckOptions, OutputFormat};
use reqcheck_util::errors::ReqcheckError;

use crate::cli::{Cli, Command, InputArgs};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Check {
            input,
            no_warn_unpinned,
        } => {
            let mut options = options(input, cli.config, cli.verbose)?;
            if no_warn_unpinned {
                options.warn_unpinned = Some(false);
            }
            check::exec(&options)
        }
        Command::Explain { input } => explain::exec(&options(input, cli.config, cli.verbose)?),
    }
}

fn options(
    input: InputArgs,
    config: Option<std::path::PathBuf>,
    verbose: bool,
) -> Result<CheckOptions> {
    let format = OutputFormat::parse(&input.format).ok_or_else(|| ReqcheckError::Generic {
        message: format!("Unknown output format '{}' (expected text or json)", input.format),
    })?;
    Ok(CheckOptions {
        requirements: input.requirements,
        files: input.files,
        config,
        strategy: input.strategy,
        warn_unpinned: None,
        format,
        verbose,
    })
}

//! Explain command implementation.

use miette::Result;

use reqcheck_ops::CheckOptions;
use reqcheck_util::errors::ReqcheckError;

pub fn exec(options: &CheckOptions) -> Result<()> {
    let cwd = std::env::current_dir().map_err(ReqcheckError::Io)?;
    reqcheck_ops::ops_explain::explain(&cwd, options)
}

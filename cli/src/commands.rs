pub mod generate;
pub mod redistrict;

use std::path::Path;

use anyhow::{bail, ensure, Result};

/// Reject stdout and refuse to clobber an existing file unless `force` is set.
pub(crate) fn check_output_path(path: &Path, force: bool) -> Result<()> {
    if path == Path::new("-") { bail!("stdout is not supported.") }
    ensure!(force || !path.exists(), "{} already exists (use --force to overwrite)", path.display());
    Ok(())
}

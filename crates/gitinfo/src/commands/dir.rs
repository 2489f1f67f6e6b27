//! Directory command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use gitinfo_core::GitReferenceInfo;

/// Arguments for the dir command.
#[derive(Debug, Args)]
pub struct DirArgs {
    /// Directory to write the files into, created if missing
    pub path: PathBuf,
}

/// Runs the dir command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(info: &GitReferenceInfo, args: DirArgs) -> Result<()> {
    let files = info.to_file_set();
    files
        .write_to(&args.path)
        .with_context(|| format!("failed to write {}", args.path.display()))?;

    info!(path = %args.path.display(), count = files.len(), "wrote git info files");
    Ok(())
}

//! JSON command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use gitinfo_core::GitReferenceInfo;

/// Arguments for the json command.
#[derive(Debug, Args)]
pub struct JsonArgs {
    /// Write to this file, or to git-info.json inside this directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Runs the json command.
pub fn run(info: &GitReferenceInfo, args: JsonArgs) -> Result<()> {
    match args.output {
        Some(path) => {
            let written = info
                .write_json(&path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %written.display(), "wrote git info");
        }
        None => println!("{}", info.to_json()?),
    }
    Ok(())
}

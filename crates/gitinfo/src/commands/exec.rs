//! Exec command.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use tokio::process::Command;
use tracing::{debug, warn};

use gitinfo_core::{Environment, GitReferenceInfo};

/// Arguments for the exec command.
#[derive(Debug, Args)]
pub struct ExecArgs {
    /// Program to run
    pub program: String,

    /// Arguments passed to the program
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Runs the exec command, returning the program's exit status.
pub async fn run(info: &GitReferenceInfo, args: ExecArgs) -> Result<ExitCode> {
    let env = info.apply_to(&Environment::new());
    debug!(program = %args.program, args = ?args.args, "running program");

    let status = Command::new(&args.program)
        .args(&args.args)
        .envs(env.iter())
        .status()
        .await
        .with_context(|| format!("failed to run {}", args.program))?;

    let Some(code) = status.code() else {
        warn!(program = %args.program, "program terminated by a signal");
        return Ok(ExitCode::FAILURE);
    };

    Ok(u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from))
}

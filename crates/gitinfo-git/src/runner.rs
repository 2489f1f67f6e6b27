//! Git command runner.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, trace};

use crate::{GitError, GitResult};

/// Program used when no explicit git executable is configured.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Executes git subcommands against a repository directory.
///
/// Implementations must treat the repository as read-only input: every
/// query the extractor issues is side-effect free.
pub trait GitRunner: Send + Sync {
    /// Runs `git <args>` against `dir` and returns its stdout, trimmed of
    /// surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned or exits with a
    /// non-zero status.
    fn run(&self, dir: &Path, args: &[String]) -> impl Future<Output = GitResult<String>> + Send;
}

/// A [`GitRunner`] spawning the git executable.
///
/// Children are killed when their future is dropped, so abandoning a query
/// does not leave a process behind.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    trust_directory: bool,
}

impl GitCli {
    /// Creates a runner for the `git` found on `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_GIT_PROGRAM),
            trust_directory: true,
        }
    }

    /// Sets the git executable to spawn.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Controls whether the repository directory is marked as a
    /// `safe.directory` for each invocation.
    #[must_use]
    pub fn with_trust_directory(mut self, trust: bool) -> Self {
        self.trust_directory = trust;
        self
    }

    /// Returns the git executable.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Returns whether the repository directory is trusted.
    #[must_use]
    pub fn trusts_directory(&self) -> bool {
        self.trust_directory
    }

    fn command(&self, dir: &Path, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.program);

        // Command-scope config: the user's global config is left untouched.
        if self.trust_directory {
            cmd.arg("-c")
                .arg(format!("safe.directory={}", repository_root(dir).display()));
        }

        cmd.arg("-C")
            .arg(dir)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        cmd
    }
}

/// Returns the directory git checks ownership of when run with `-C dir`.
///
/// That is the closest worktree root (a directory holding `.git`) or git
/// directory at or above `dir`; `dir` itself when neither is found.
fn repository_root(dir: &Path) -> PathBuf {
    let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    dir.ancestors()
        .find(|candidate| candidate.join(".git").exists() || is_git_dir(candidate))
        .map_or_else(|| dir.clone(), Path::to_path_buf)
}

fn is_git_dir(path: &Path) -> bool {
    path.join("HEAD").is_file() && path.join("objects").is_dir()
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for GitCli {
    async fn run(&self, dir: &Path, args: &[String]) -> GitResult<String> {
        let mut cmd = self.command(dir, args);
        trace!(?cmd, "running git command");

        let output = cmd.output().await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => GitError::GitNotInstalled(self.program.clone()),
            _ => GitError::Io(e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(
                args = ?args,
                code = ?output.status.code(),
                stderr = %stderr,
                "git command failed"
            );
            return Err(GitError::CommandFailed {
                command: args.join(" "),
                code: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

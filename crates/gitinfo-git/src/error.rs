//! Git error types.

use std::path::PathBuf;

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git program could not be found.
    #[error("git executable not found: {0}")]
    GitNotInstalled(PathBuf),

    /// A git command exited unsuccessfully.
    #[error("`git {command}` failed: {stderr}")]
    CommandFailed {
        /// The subcommand and its arguments.
        command: String,
        /// Exit code, `None` when terminated by a signal.
        code: Option<i32>,
        /// Diagnostic output of the command.
        stderr: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;

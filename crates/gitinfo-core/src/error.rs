//! Core error types.

use gitinfo_git::GitError;
use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The reference could not be resolved to a branch.
    #[error("failed to get branch: {0}")]
    Branch(#[source] GitError),

    /// The abbreviated commit hash could not be resolved.
    #[error("failed to get commit hash with length {length}: {source}")]
    CommitHash { length: usize, source: GitError },

    /// The commit user could not be formatted.
    #[error("failed to get commit user with format {format:?}: {source}")]
    CommitUser { format: String, source: GitError },

    /// The commit time could not be formatted.
    #[error("failed to get commit time with format {format:?}: {source}")]
    CommitTime { format: String, source: GitError },

    /// The commit message could not be formatted.
    #[error("failed to get commit message with format {format:?}: {source}")]
    CommitMessage { format: String, source: GitError },

    /// The descriptive version could not be resolved.
    #[error("failed to get version: {0}")]
    Version(#[source] GitError),

    /// Any other step failed.
    #[error("failed to get {step}: {source}")]
    Step { step: String, source: GitError },

    /// The record could not be encoded as JSON.
    #[error("failed to marshal git info: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A JSON document could not be decoded into a record.
    #[error("failed to parse git info: {0}")]
    Parse(#[source] serde_json::Error),

    /// A file set lacks one of the record's fields.
    #[error("missing git info field: {0}")]
    MissingField(String),

    /// A field name does not match any record field.
    #[error("unknown git info field: {0}")]
    UnknownField(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] gitinfo_config::ConfigError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

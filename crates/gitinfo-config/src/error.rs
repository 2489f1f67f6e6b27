//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating, parsing or validating `gitinfo.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No `gitinfo.toml` at the given path.
    #[error("gitinfo.toml not found: {0}")]
    NotFound(PathBuf),

    /// The file is not valid TOML, or a key has the wrong type.
    #[error("failed to parse gitinfo.toml: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// A key holds a value extraction cannot use.
    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ConfigError::NotFound(PathBuf::from("/path/to/gitinfo.toml"));
        assert_eq!(
            err.to_string(),
            "gitinfo.toml not found: /path/to/gitinfo.toml"
        );
    }

    #[test]
    fn test_invalid_names_key() {
        let err = ConfigError::invalid("commit.hash_length", "must be between 4 and 40, got 2");
        assert_eq!(
            err.to_string(),
            "invalid value for `commit.hash_length`: must be between 4 and 40, got 2"
        );
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "commit.hash_length",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_toml_display() {
        let err = toml::from_str::<toml::Table>("ref = ").unwrap_err();
        let err = ConfigError::from(err);
        assert!(err.to_string().starts_with("failed to parse gitinfo.toml: "));
    }
}

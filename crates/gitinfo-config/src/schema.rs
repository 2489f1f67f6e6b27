//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Shortest abbreviated commit hash git will produce.
pub const MIN_HASH_LENGTH: usize = 4;

/// Length of a full SHA-1 commit hash.
pub const MAX_HASH_LENGTH: usize = 40;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Git reference to describe.
    #[serde(default = "default_ref", rename = "ref")]
    pub reference: String,

    /// Name of the remote whose URL is reported.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Commit formatting configuration.
    #[serde(default)]
    pub commit: CommitConfig,

    /// Git executable configuration.
    #[serde(default)]
    pub git: GitConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference: default_ref(),
            remote: default_remote(),
            commit: CommitConfig::default(),
            git: GitConfig::default(),
        }
    }
}

impl Config {
    /// Checks values that deserialization alone cannot enforce.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first offending value.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.reference.trim().is_empty() {
            return Err(ConfigError::invalid("ref", "must not be empty"));
        }
        if self.remote.trim().is_empty() {
            return Err(ConfigError::invalid("remote", "must not be empty"));
        }
        // Would be parsed as an option by git.
        if self.reference.trim_start().starts_with('-') {
            return Err(ConfigError::invalid(
                "ref",
                format!("must not start with '-', got {:?}", self.reference),
            ));
        }
        if !(MIN_HASH_LENGTH..=MAX_HASH_LENGTH).contains(&self.commit.hash_length) {
            return Err(ConfigError::invalid(
                "commit.hash_length",
                format!(
                    "must be between {MIN_HASH_LENGTH} and {MAX_HASH_LENGTH}, got {}",
                    self.commit.hash_length
                ),
            ));
        }
        Ok(())
    }
}

fn default_ref() -> String {
    "HEAD".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Commit formatting configuration.
///
/// Format strings follow git's pretty formats (`git help log`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitConfig {
    /// Length of the reported commit hash.
    #[serde(default = "default_hash_length")]
    pub hash_length: usize,

    /// Format of the commit user.
    #[serde(default = "default_user_format")]
    pub user_format: String,

    /// Format of the commit time.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Format of the commit message.
    #[serde(default = "default_message_format")]
    pub message_format: String,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            hash_length: default_hash_length(),
            user_format: default_user_format(),
            date_format: default_date_format(),
            message_format: default_message_format(),
        }
    }
}

fn default_hash_length() -> usize {
    MAX_HASH_LENGTH
}

fn default_user_format() -> String {
    "%an".to_string()
}

fn default_date_format() -> String {
    "%cI".to_string()
}

fn default_message_format() -> String {
    "%B".to_string()
}

/// Git executable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    /// Git program to run.
    #[serde(default = "default_program")]
    pub program: String,

    /// Mark the repository as a `safe.directory` for each command.
    #[serde(default = "default_true")]
    pub trust_directory: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            trust_directory: true,
        }
    }
}

fn default_program() -> String {
    "git".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.reference, "HEAD");
        assert_eq!(config.remote, "origin");
        assert_eq!(config.commit.hash_length, 40);
        assert_eq!(config.git.program, "git");
        assert!(config.git.trust_directory);
    }

    #[test]
    fn test_default_commit_config() {
        let config = CommitConfig::default();
        assert_eq!(config.user_format, "%an");
        assert_eq!(config.date_format, "%cI");
        assert_eq!(config.message_format, "%B");
    }

    #[test]
    fn test_deserialize_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_deserialize_minimal() {
        let toml = r#"
            ref = "main"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.reference, "main");
        assert_eq!(config.remote, "origin"); // default
        assert!(config.git.trust_directory); // default
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
            ref = "v1.2.3"
            remote = "upstream"

            [commit]
            hash_length = 7
            user_format = "%ae"
            date_format = "%ct"
            message_format = "%s"

            [git]
            program = "/usr/local/bin/git"
            trust_directory = false
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.reference, "v1.2.3");
        assert_eq!(config.remote, "upstream");
        assert_eq!(config.commit.hash_length, 7);
        assert_eq!(config.commit.user_format, "%ae");
        assert_eq!(config.commit.date_format, "%ct");
        assert_eq!(config.commit.message_format, "%s");
        assert_eq!(config.git.program, "/usr/local/bin/git");
        assert!(!config.git.trust_directory);
    }

    #[test]
    fn test_deserialize_partial_commit_table() {
        let toml = r"
            [commit]
            hash_length = 12
        ";

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.commit.hash_length, 12);
        assert_eq!(config.commit.user_format, "%an");
    }

    #[test]
    fn test_validate_default() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_hash_length_bounds() {
        let mut config = Config::default();

        config.commit.hash_length = MIN_HASH_LENGTH;
        assert!(config.validate().is_ok());

        config.commit.hash_length = 3;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                key: "commit.hash_length",
                ..
            })
        ));

        config.commit.hash_length = 41;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("got 41"));
    }

    #[test]
    fn test_validate_empty_ref() {
        let config = Config {
            reference: "  ".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid value for `ref`: must not be empty");
    }

    #[test]
    fn test_validate_option_like_ref() {
        let config = Config {
            reference: "--output=/tmp/x".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must not start with '-'"));
    }

    #[test]
    fn test_validate_empty_remote() {
        let config = Config {
            remote: String::new(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { key: "remote", .. })
        ));
    }

    #[test]
    fn test_serialize_config() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("ref = \"HEAD\""));
        assert!(toml_str.contains("[commit]"));
        assert!(toml_str.contains("hash_length = 40"));
    }
}

//! Extraction options.

use gitinfo_config::Config;

use crate::CoreResult;

/// Options for a single extraction.
///
/// Built once from a validated [`Config`]; the defaults are:
///
/// | option           | default  |
/// |------------------|----------|
/// | `reference`      | `HEAD`   |
/// | `remote`         | `origin` |
/// | `hash_length`    | `40`     |
/// | `user_format`    | `%an`    |
/// | `date_format`    | `%cI`    |
/// | `message_format` | `%B`     |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    reference: String,
    remote: String,
    hash_length: usize,
    user_format: String,
    date_format: String,
    message_format: String,
}

impl ExtractOptions {
    /// Creates options from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            reference: config.reference.trim().to_string(),
            remote: config.remote.trim().to_string(),
            hash_length: config.commit.hash_length,
            user_format: config.commit.user_format.clone(),
            date_format: config.commit.date_format.clone(),
            message_format: config.commit.message_format.clone(),
        })
    }

    /// Git reference to describe.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Remote whose URL is reported.
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Length of the commit hash.
    pub fn hash_length(&self) -> usize {
        self.hash_length
    }

    /// Pretty format of the commit user.
    pub fn user_format(&self) -> &str {
        &self.user_format
    }

    /// Pretty format of the commit time.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Pretty format of the commit message.
    pub fn message_format(&self) -> &str {
        &self.message_format
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        let config = Config::default();
        Self {
            reference: config.reference,
            remote: config.remote,
            hash_length: config.commit.hash_length,
            user_format: config.commit.user_format,
            date_format: config.commit.date_format,
            message_format: config.commit.message_format,
        }
    }
}

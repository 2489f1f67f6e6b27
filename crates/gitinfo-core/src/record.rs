//! The extracted git reference record.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CoreError, CoreResult};

/// File name used when the JSON document is written into a directory.
pub const JSON_FILE_NAME: &str = "git-info.json";

/// A field of [`GitReferenceInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Git reference used for the queries.
    Ref,
    /// Branch of the reference.
    Branch,
    /// Tag of the reference, if any.
    Tag,
    /// Commit hash.
    CommitHash,
    /// Commit user.
    CommitUser,
    /// Commit time.
    CommitTime,
    /// Commit message.
    CommitMessage,
    /// Descriptive version.
    Version,
    /// Repository URL.
    Url,
    /// Repository name.
    Name,
}

impl Field {
    /// Every field, in record order.
    pub const ALL: [Field; 10] = [
        Field::Ref,
        Field::Branch,
        Field::Tag,
        Field::CommitHash,
        Field::CommitUser,
        Field::CommitTime,
        Field::CommitMessage,
        Field::Version,
        Field::Url,
        Field::Name,
    ];

    /// Lower kebab-case name, used for file outputs.
    pub fn key(self) -> &'static str {
        match self {
            Field::Ref => "ref",
            Field::Branch => "branch",
            Field::Tag => "tag",
            Field::CommitHash => "commit-hash",
            Field::CommitUser => "commit-user",
            Field::CommitTime => "commit-time",
            Field::CommitMessage => "commit-message",
            Field::Version => "version",
            Field::Url => "url",
            Field::Name => "name",
        }
    }

    /// Environment variable name.
    pub fn env_var(self) -> &'static str {
        match self {
            Field::Ref => "GIT_REF",
            Field::Branch => "GIT_BRANCH",
            Field::Tag => "GIT_TAG",
            Field::CommitHash => "GIT_COMMIT_HASH",
            Field::CommitUser => "GIT_COMMIT_USER",
            Field::CommitTime => "GIT_COMMIT_TIME",
            Field::CommitMessage => "GIT_COMMIT_MESSAGE",
            Field::Version => "GIT_VERSION",
            Field::Url => "GIT_URL",
            Field::Name => "GIT_NAME",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// Information about a git reference.
///
/// Constructed once per extraction and never mutated; every export is a
/// projection of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GitReferenceInfo {
    #[serde(rename = "Ref")]
    pub(crate) reference: String,
    pub(crate) branch: String,
    pub(crate) tag: String,
    pub(crate) commit_hash: String,
    pub(crate) commit_user: String,
    pub(crate) commit_time: String,
    pub(crate) commit_message: String,
    pub(crate) version: String,
    #[serde(rename = "URL")]
    pub(crate) url: String,
    pub(crate) name: String,
}

impl GitReferenceInfo {
    /// Builds a record by asking `value` for every field.
    pub(crate) fn try_from_fn<E>(
        mut value: impl FnMut(Field) -> Result<String, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            reference: value(Field::Ref)?,
            branch: value(Field::Branch)?,
            tag: value(Field::Tag)?,
            commit_hash: value(Field::CommitHash)?,
            commit_user: value(Field::CommitUser)?,
            commit_time: value(Field::CommitTime)?,
            commit_message: value(Field::CommitMessage)?,
            version: value(Field::Version)?,
            url: value(Field::Url)?,
            name: value(Field::Name)?,
        })
    }

    /// Returns the value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Ref => &self.reference,
            Field::Branch => &self.branch,
            Field::Tag => &self.tag,
            Field::CommitHash => &self.commit_hash,
            Field::CommitUser => &self.commit_user,
            Field::CommitTime => &self.commit_time,
            Field::CommitMessage => &self.commit_message,
            Field::Version => &self.version,
            Field::Url => &self.url,
            Field::Name => &self.name,
        }
    }

    /// Iterates over every field and its value, in record order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(|field| (field, self.get(field)))
    }

    /// Git reference used for the queries.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Branch of the reference; `HEAD` when detached.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Tag pointing exactly at the reference, empty if none.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Commit hash, abbreviated to the requested length.
    pub fn commit_hash(&self) -> &str {
        &self.commit_hash
    }

    /// Formatted commit user.
    pub fn commit_user(&self) -> &str {
        &self.commit_user
    }

    /// Formatted commit time.
    pub fn commit_time(&self) -> &str {
        &self.commit_time
    }

    /// Formatted commit message.
    pub fn commit_message(&self) -> &str {
        &self.commit_message
    }

    /// Nearest tag plus distance, or the short hash.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Credential-free repository URL, empty without a remote.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Last path segment of the URL.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the record as an indented JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string_pretty(self).map_err(CoreError::Serialize)
    }

    /// Parses a record from a JSON document produced by [`Self::to_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or lacks a field.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(CoreError::Parse)
    }

    /// Writes the JSON document to `path`.
    ///
    /// When `path` is an existing directory the document is written to
    /// [`JSON_FILE_NAME`] inside it. Returns the written file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_json(&self, path: impl AsRef<Path>) -> CoreResult<std::path::PathBuf> {
        let path = path.as_ref();
        let target = if path.is_dir() {
            path.join(JSON_FILE_NAME)
        } else {
            path.to_path_buf()
        };

        let json = self.to_json()?;
        std::fs::write(&target, json)?;
        debug!(path = ?target, "wrote git info JSON");

        Ok(target)
    }
}

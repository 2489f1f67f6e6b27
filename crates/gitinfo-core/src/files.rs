//! File set projection of a record.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::{CoreError, CoreResult, Field, GitReferenceInfo};

/// A set of named text outputs, one per file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: BTreeMap<String, String>,
}

impl FileSet {
    /// Creates an empty file set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set with `name` holding `content`.
    #[must_use]
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(name.into(), content.into());
        self
    }

    /// Returns the content of a file.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    /// Returns the number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if the set holds no file.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates over file names and contents, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Writes every file into `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a file cannot be written.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> CoreResult<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        for (name, content) in &self.files {
            std::fs::write(dir.join(name), content)?;
        }

        debug!(?dir, count = self.files.len(), "wrote file set");
        Ok(())
    }

    /// Reads every regular file directly inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a file cannot be read.
    pub fn read_from(dir: impl AsRef<Path>) -> CoreResult<Self> {
        let mut files = BTreeMap::new();

        for entry in std::fs::read_dir(dir.as_ref())? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            let content = std::fs::read_to_string(entry.path())?;
            files.insert(name, content);
        }

        Ok(Self { files })
    }
}

impl GitReferenceInfo {
    /// Projects the record to one file per field, named by [`Field::key`].
    pub fn to_file_set(&self) -> FileSet {
        self.fields()
            .fold(FileSet::new(), |set, (field, value)| {
                set.with_file(field.key(), value)
            })
    }
}

impl TryFrom<&FileSet> for GitReferenceInfo {
    type Error = CoreError;

    fn try_from(set: &FileSet) -> Result<Self, Self::Error> {
        GitReferenceInfo::try_from_fn(|field: Field| {
            set.get(field.key())
                .map(str::to_string)
                .ok_or_else(|| CoreError::MissingField(field.key().to_string()))
        })
    }
}

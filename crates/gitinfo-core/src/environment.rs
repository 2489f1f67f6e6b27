//! Environment projection of a record.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::GitReferenceInfo;

/// A set of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the environment with `key` set to `value`, replacing any
    /// previous value.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Returns the value of a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns the number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no variable is set.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates over variables, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders POSIX shell `export` statements, one per line.
    pub fn render_exports(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.vars {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "export {key}={}", shell_quote(value));
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl GitReferenceInfo {
    /// Returns `env` augmented with one `GIT_*` variable per field.
    ///
    /// `env` itself is left untouched; existing `GIT_*` variables are
    /// overwritten in the returned environment.
    pub fn apply_to(&self, env: &Environment) -> Environment {
        self.fields()
            .fold(env.clone(), |env, (field, value)| {
                env.with_var(field.env_var(), value)
            })
    }
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

//! Extraction steps and their failure policy.

use std::fmt;

use gitinfo_git::{GitError, GitResult};
use tracing::debug;

use crate::{CoreError, CoreResult, ExtractOptions};

/// What a failed step does to the extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// The failure aborts the extraction.
    Fatal,
    /// The failure yields an empty value.
    Optional,
}

/// One git query issued during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Abbreviated branch name of the reference.
    Branch,
    /// Tag pointing exactly at the reference.
    Tag,
    /// Commit hash, abbreviated to the configured length.
    CommitHash,
    /// Commit user, formatted.
    CommitUser,
    /// Commit time, formatted.
    CommitTime,
    /// Commit message, formatted.
    CommitMessage,
    /// Nearest tag plus distance, or the short hash.
    Version,
    /// Fetch URL of the configured remote.
    RemoteUrl,
}

impl Step {
    /// Every step, in record order.
    pub const ALL: [Step; 8] = [
        Step::Branch,
        Step::Tag,
        Step::CommitHash,
        Step::CommitUser,
        Step::CommitTime,
        Step::CommitMessage,
        Step::Version,
        Step::RemoteUrl,
    ];

    /// Returns the failure policy of this step.
    ///
    /// Tags and remotes depend on repository topology and may legitimately
    /// be absent; everything else exists for any valid commit.
    pub fn policy(self) -> Policy {
        match self {
            Step::Tag | Step::RemoteUrl => Policy::Optional,
            _ => Policy::Fatal,
        }
    }

    /// Returns the git arguments for this step.
    pub fn args(self, options: &ExtractOptions) -> Vec<String> {
        let reference = options.reference();
        match self {
            Step::Branch => vec!["rev-parse".into(), "--abbrev-ref".into(), reference.into()],
            Step::Tag => vec![
                "describe".into(),
                "--tags".into(),
                "--exact-match".into(),
                reference.into(),
            ],
            Step::CommitHash => vec![
                "rev-parse".into(),
                format!("--short={}", options.hash_length()),
                reference.into(),
            ],
            Step::CommitUser => show(options.user_format(), reference),
            Step::CommitTime => show(options.date_format(), reference),
            Step::CommitMessage => show(options.message_format(), reference),
            Step::Version => vec![
                "describe".into(),
                "--tags".into(),
                "--always".into(),
                reference.into(),
            ],
            Step::RemoteUrl => vec![
                "config".into(),
                "--get".into(),
                format!("remote.{}.url", options.remote()),
            ],
        }
    }

    /// Applies this step's policy to the outcome of its query.
    ///
    /// # Errors
    ///
    /// Returns the step's contextual error when a fatal step failed.
    pub fn resolve(self, options: &ExtractOptions, result: GitResult<String>) -> CoreResult<String> {
        let source = match result {
            Ok(output) => return Ok(output),
            Err(e) => e,
        };

        if self.policy() == Policy::Optional {
            debug!(step = %self, error = %source, "optional git query failed, using empty value");
            return Ok(String::new());
        }

        Err(self.fatal_error(options, source))
    }

    fn fatal_error(self, options: &ExtractOptions, source: GitError) -> CoreError {
        match self {
            Step::Branch => CoreError::Branch(source),
            Step::CommitHash => CoreError::CommitHash {
                length: options.hash_length(),
                source,
            },
            Step::CommitUser => CoreError::CommitUser {
                format: options.user_format().to_string(),
                source,
            },
            Step::CommitTime => CoreError::CommitTime {
                format: options.date_format().to_string(),
                source,
            },
            Step::CommitMessage => CoreError::CommitMessage {
                format: options.message_format().to_string(),
                source,
            },
            Step::Version => CoreError::Version(source),
            // Only reachable if the policy table marks these fatal.
            Step::Tag | Step::RemoteUrl => CoreError::Step {
                step: self.to_string(),
                source,
            },
        }
    }
}

fn show(format: &str, reference: &str) -> Vec<String> {
    vec![
        "show".into(),
        "-s".into(),
        format!("--format={format}"),
        reference.into(),
    ]
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Branch => "branch",
            Step::Tag => "tag",
            Step::CommitHash => "commit hash",
            Step::CommitUser => "commit user",
            Step::CommitTime => "commit time",
            Step::CommitMessage => "commit message",
            Step::Version => "version",
            Step::RemoteUrl => "remote url",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitinfo_config::Config;

    fn failure() -> GitError {
        GitError::CommandFailed {
            command: "any".to_string(),
            code: Some(128),
            stderr: "fatal: boom".to_string(),
        }
    }

    fn custom_options() -> ExtractOptions {
        let mut config = Config {
            reference: "v1.2.3".to_string(),
            remote: "upstream".to_string(),
            ..Config::default()
        };
        config.commit.hash_length = 7;
        config.commit.user_format = "%ae".to_string();
        ExtractOptions::from_config(&config).unwrap()
    }

    #[test]
    fn test_policy_table() {
        let optional: Vec<Step> = Step::ALL
            .into_iter()
            .filter(|s| s.policy() == Policy::Optional)
            .collect();
        assert_eq!(optional, vec![Step::Tag, Step::RemoteUrl]);
    }

    #[test]
    fn test_resolve_follows_policy() {
        let options = ExtractOptions::default();
        for step in Step::ALL {
            let result = step.resolve(&options, Err(failure()));
            match step.policy() {
                Policy::Optional => assert_eq!(result.unwrap(), ""),
                Policy::Fatal => assert!(result.is_err(), "{step} should be fatal"),
            }
        }
    }

    #[test]
    fn test_resolve_passes_output_through() {
        let options = ExtractOptions::default();
        for step in Step::ALL {
            let value = step.resolve(&options, Ok("value".to_string())).unwrap();
            assert_eq!(value, "value");
        }
    }

    #[test]
    fn test_resolve_error_names_step() {
        let options = custom_options();

        let err = Step::Branch.resolve(&options, Err(failure())).unwrap_err();
        assert!(err.to_string().starts_with("failed to get branch: "));

        let err = Step::CommitHash.resolve(&options, Err(failure())).unwrap_err();
        assert!(err.to_string().starts_with("failed to get commit hash with length 7: "));

        let err = Step::CommitUser.resolve(&options, Err(failure())).unwrap_err();
        assert!(err.to_string().contains("format \"%ae\""));

        let err = Step::Version.resolve(&options, Err(failure())).unwrap_err();
        assert!(err.to_string().starts_with("failed to get version: "));
    }

    #[test]
    fn test_args_default() {
        let options = ExtractOptions::default();
        assert_eq!(
            Step::Branch.args(&options),
            ["rev-parse", "--abbrev-ref", "HEAD"]
        );
        assert_eq!(
            Step::Tag.args(&options),
            ["describe", "--tags", "--exact-match", "HEAD"]
        );
        assert_eq!(
            Step::CommitHash.args(&options),
            ["rev-parse", "--short=40", "HEAD"]
        );
        assert_eq!(
            Step::CommitTime.args(&options),
            ["show", "-s", "--format=%cI", "HEAD"]
        );
        assert_eq!(
            Step::CommitMessage.args(&options),
            ["show", "-s", "--format=%B", "HEAD"]
        );
        assert_eq!(
            Step::Version.args(&options),
            ["describe", "--tags", "--always", "HEAD"]
        );
        assert_eq!(
            Step::RemoteUrl.args(&options),
            ["config", "--get", "remote.origin.url"]
        );
    }

    #[test]
    fn test_args_custom() {
        let options = custom_options();
        assert_eq!(
            Step::CommitHash.args(&options),
            ["rev-parse", "--short=7", "v1.2.3"]
        );
        assert_eq!(
            Step::CommitUser.args(&options),
            ["show", "-s", "--format=%ae", "v1.2.3"]
        );
        assert_eq!(
            Step::RemoteUrl.args(&options),
            ["config", "--get", "remote.upstream.url"]
        );
    }

    #[test]
    fn test_fatal_error_for_every_step() {
        let options = ExtractOptions::default();
        for step in Step::ALL {
            let err = step.fatal_error(&options, failure());
            assert!(
                err.to_string().starts_with(&format!("failed to get {step}")),
                "{step}: {err}"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::CommitHash.to_string(), "commit hash");
        assert_eq!(Step::RemoteUrl.to_string(), "remote url");
    }
}

//! Git reference information extraction.

use std::path::{Path, PathBuf};

use gitinfo_git::GitRunner;
use tracing::{debug, info};

use crate::{
    CoreResult, ExtractOptions, GitReferenceInfo, Step, normalize_remote_url, repository_name,
};

/// Extracts [`GitReferenceInfo`] from a repository directory.
///
/// The directory can be either a worktree or a bare `.git` directory; it is
/// only ever read.
pub struct Extractor<R> {
    runner: R,
    repo_dir: PathBuf,
}

impl<R: GitRunner> Extractor<R> {
    /// Creates an extractor running git queries through `runner`.
    pub fn new(runner: R, repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            repo_dir: repo_dir.into(),
        }
    }

    /// Returns the repository directory.
    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    /// Returns the runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Extracts information about the reference named in `options`.
    ///
    /// The branch is resolved first; the remaining queries are then issued
    /// concurrently. The first fatal failure ends the extraction and drops
    /// the queries still in flight.
    ///
    /// # Errors
    ///
    /// Returns an error naming the failed step if the branch, commit hash,
    /// commit user, time, message or version cannot be resolved. A missing
    /// exact tag or remote is not an error.
    pub async fn extract(&self, options: &ExtractOptions) -> CoreResult<GitReferenceInfo> {
        debug!(
            repo = ?self.repo_dir,
            reference = options.reference(),
            remote = options.remote(),
            "extracting git reference info"
        );

        // Resolving the branch validates the reference, so an unknown ref is
        // always reported by this step rather than whichever query fails first.
        let branch = self.query(Step::Branch, options).await?;

        let (tag, commit_hash, commit_user, commit_time, commit_message, version, remote) = tokio::try_join!(
            self.query(Step::Tag, options),
            self.query(Step::CommitHash, options),
            self.query(Step::CommitUser, options),
            self.query(Step::CommitTime, options),
            self.query(Step::CommitMessage, options),
            self.query(Step::Version, options),
            self.query(Step::RemoteUrl, options),
        )?;

        let url = normalize_remote_url(&remote);
        let name = repository_name(&url).to_string();

        let info = GitReferenceInfo {
            reference: options.reference().to_string(),
            branch,
            tag,
            commit_hash,
            commit_user,
            commit_time,
            commit_message,
            version,
            url,
            name,
        };

        info!(
            reference = info.reference(),
            branch = info.branch(),
            version = info.version(),
            commit = info.commit_hash(),
            "extracted git reference info"
        );

        Ok(info)
    }

    async fn query(&self, step: Step, options: &ExtractOptions) -> CoreResult<String> {
        let args = step.args(options);
        debug!(%step, ?args, "querying git");

        let result = self.runner.run(&self.repo_dir, &args).await;
        step.resolve(options, result)
            .map(|output| output.trim().to_string())
    }
}

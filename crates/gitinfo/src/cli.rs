//! CLI definition.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use gitinfo_config::{Config, ConfigError, find_and_load_config_from, load_config};
use gitinfo_core::{ExtractOptions, Extractor, GitReferenceInfo};
use gitinfo_git::GitCli;

use crate::commands;

/// Extract information about a git reference as JSON, files or environment variables.
#[derive(Debug, Parser)]
#[command(name = "gitinfo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the git info as JSON, or write it to a file
    Json(commands::json::JsonArgs),

    /// Write each field to its own file in a directory
    Dir(commands::dir::DirArgs),

    /// Print `export GIT_*=...` shell statements
    Env(commands::env::EnvArgs),

    /// Run a program with the GIT_* variables set
    Exec(commands::exec::ExecArgs),

    /// Print a single field
    Get(commands::get::GetArgs),
}

/// Where and how to read the git reference.
///
/// Flags override the configuration file, which overrides the defaults.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Repository directory, either the worktree or the .git directory
    #[arg(short = 'C', long = "repo", global = true, default_value = ".", env = "GITINFO_REPO")]
    pub repo: PathBuf,

    /// Configuration file (default: gitinfo.toml in the repository or a parent)
    #[arg(long, global = true, env = "GITINFO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Git reference to describe [default: HEAD]
    #[arg(long = "ref", global = true, env = "GITINFO_REF")]
    pub reference: Option<String>,

    /// Remote whose URL is reported [default: origin]
    #[arg(long, global = true, env = "GITINFO_REMOTE")]
    pub remote: Option<String>,

    /// Length of the commit hash [default: 40]
    #[arg(long, global = true, env = "GITINFO_HASH_LENGTH")]
    pub hash_length: Option<usize>,

    /// Pretty format of the commit user [default: %an]
    #[arg(long, global = true, env = "GITINFO_USER_FORMAT")]
    pub user_format: Option<String>,

    /// Pretty format of the commit time [default: %cI]
    #[arg(long, global = true, env = "GITINFO_DATE_FORMAT")]
    pub date_format: Option<String>,

    /// Pretty format of the commit message [default: %B]
    #[arg(long, global = true, env = "GITINFO_MESSAGE_FORMAT")]
    pub message_format: Option<String>,

    /// Git executable to run [default: git]
    #[arg(long = "git", global = true, env = "GITINFO_GIT")]
    pub git_program: Option<String>,
}

impl SourceArgs {
    /// Loads the configuration and applies flag overrides.
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?,
            None => {
                let start = self.repo.canonicalize().unwrap_or_else(|_| self.repo.clone());
                match find_and_load_config_from(&start) {
                    Ok(config) => config,
                    Err(ConfigError::NotFound(_)) => {
                        debug!("no configuration file found, using defaults");
                        Config::default()
                    }
                    Err(e) => return Err(e).context("failed to load configuration"),
                }
            }
        };

        if let Some(reference) = &self.reference {
            config.reference.clone_from(reference);
        }
        if let Some(remote) = &self.remote {
            config.remote.clone_from(remote);
        }
        if let Some(length) = self.hash_length {
            config.commit.hash_length = length;
        }
        if let Some(format) = &self.user_format {
            config.commit.user_format.clone_from(format);
        }
        if let Some(format) = &self.date_format {
            config.commit.date_format.clone_from(format);
        }
        if let Some(format) = &self.message_format {
            config.commit.message_format.clone_from(format);
        }
        if let Some(program) = &self.git_program {
            config.git.program.clone_from(program);
        }

        Ok(config)
    }

    /// Extracts the git info described by these arguments.
    pub async fn extract(&self) -> Result<GitReferenceInfo> {
        let config = self.config()?;
        let options = ExtractOptions::from_config(&config).context("invalid options")?;

        let runner = GitCli::new()
            .with_program(&config.git.program)
            .with_trust_directory(config.git.trust_directory);

        Extractor::new(runner, &self.repo)
            .extract(&options)
            .await
            .context("failed to extract git info")
    }
}

impl Cli {
    /// Runs the CLI command.
    pub async fn run(self) -> Result<ExitCode> {
        let info = self.source.extract().await?;

        match self.command {
            Commands::Json(args) => commands::json::run(&info, args)?,
            Commands::Dir(args) => commands::dir::run(&info, args)?,
            Commands::Env(args) => commands::env::run(&info, args),
            Commands::Exec(args) => return commands::exec::run(&info, args).await,
            Commands::Get(args) => commands::get::run(&info, args),
        }

        Ok(ExitCode::SUCCESS)
    }
}

//! Configuration management for gitinfo.
//!
//! This crate handles loading and validating the `gitinfo.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config_from, load_config};
pub use schema::{CommitConfig, Config, GitConfig, MAX_HASH_LENGTH, MIN_HASH_LENGTH};

//! Git command runner for gitinfo.
//!
//! This crate provides the execution side of git queries:
//! - The [`GitRunner`] abstraction
//! - A process-backed implementation, [`GitCli`]
//! - Trusted directory handling for foreign-owned checkouts

mod error;
mod runner;

pub use error::{GitError, GitResult};
pub use runner::{DEFAULT_GIT_PROGRAM, GitCli, GitRunner};

//! Subcommands.

pub mod dir;
pub mod env;
pub mod exec;
pub mod get;
pub mod json;

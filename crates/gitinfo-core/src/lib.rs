//! Git reference information for gitinfo.
//!
//! This crate provides the extraction and export logic:
//! - Remote URL normalization
//! - The per-step query policy
//! - Concurrent extraction of a [`GitReferenceInfo`]
//! - JSON, file set and environment projections of the record

mod environment;
mod error;
mod extractor;
mod files;
mod options;
mod record;
mod remote;
mod step;

pub use environment::Environment;
pub use error::{CoreError, CoreResult};
pub use extractor::Extractor;
pub use files::FileSet;
pub use options::ExtractOptions;
pub use record::{Field, GitReferenceInfo, JSON_FILE_NAME};
pub use remote::{normalize_remote_url, repository_name};
pub use step::{Policy, Step};

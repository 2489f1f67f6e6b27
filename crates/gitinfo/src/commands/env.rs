//! Environment command.

use clap::Args;

use gitinfo_core::{Environment, GitReferenceInfo};

/// Arguments for the env command.
#[derive(Debug, Args)]
pub struct EnvArgs {}

/// Runs the env command.
///
/// The output is meant for `eval "$(gitinfo env)"`.
#[allow(clippy::needless_pass_by_value)]
pub fn run(info: &GitReferenceInfo, _args: EnvArgs) {
    print!("{}", info.apply_to(&Environment::new()).render_exports());
}

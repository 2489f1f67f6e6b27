//! Get command.

use clap::Args;

use gitinfo_core::{Field, GitReferenceInfo};

/// Arguments for the get command.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Field to print: ref, branch, tag, commit-hash, commit-user,
    /// commit-time, commit-message, version, url or name
    #[arg(value_parser = parse_field)]
    pub field: Field,
}

fn parse_field(s: &str) -> Result<Field, String> {
    s.parse().map_err(|e: gitinfo_core::CoreError| e.to_string())
}

/// Runs the get command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(info: &GitReferenceInfo, args: GetArgs) {
    println!("{}", info.get(args.field));
}

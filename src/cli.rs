use crate::steps::sync::SyncArgs;
use clap::Parser;

/// Matches the go.mod versions in one module to another.
///
/// Takes a path to a Go module (a directory with a go.mod file) and rewrites
/// the require block of another module's go.mod to use the versions pinned
/// in the first. Only dependencies the target already lists are touched.
#[derive(Parser, Debug)]
#[command(name = "match-versions", version)]
pub struct Cli {
    #[command(flatten)]
    pub sync: SyncArgs,
}

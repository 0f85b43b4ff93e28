#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod fs;
pub mod gomod;
pub mod report;
pub mod steps;
pub mod verify;

pub use error::*;

/// Parses the command line and runs a sync, reporting to the terminal.
pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    let mut reporter = report::TerminalReporter::new(cli.sync.quiet);
    steps::sync::execute(&cli.sync, &mut reporter).map(|_| ())
}

//! User-facing progress and error reporting.
//!
//! The orchestrator receives a `Reporter` instead of printing directly, so
//! the binary gets coloured terminal output and tests can record events.

use crate::error::MatchError;
use crate::gomod::VersionChange;
use colored::Colorize;
use std::path::Path;

/// Receives the outcome of a sync as it happens.
pub trait Reporter {
    /// A target dependency picked up the source's version.
    fn change(&mut self, change: &VersionChange, dry_run: bool);

    /// The run completed. `written` is false for dry runs and for targets
    /// whose content did not change.
    fn finished(&mut self, target: &Path, changes: usize, written: bool, dry_run: bool);

    /// The run failed. Called once, before the error is returned.
    fn error(&mut self, err: &MatchError);
}

/// Cargo-style coloured output on stdout/stderr.
#[derive(Debug, Default)]
pub struct TerminalReporter {
    quiet: bool,
}

impl TerminalReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

/// Shows `path` relative to the working directory when that is shorter.
fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(path, cwd))
        .filter(|rel| !rel.starts_with(".."))
        .unwrap_or_else(|| path.to_path_buf());
    relative.to_string_lossy().replace('\\', "/")
}

impl Reporter for TerminalReporter {
    fn change(&mut self, change: &VersionChange, dry_run: bool) {
        if self.quiet {
            return;
        }

        let status = if dry_run {
            "Pending".blue().bold()
        } else {
            "Updating".green().bold()
        };
        println!(
            "{:>12} {} {} → {}",
            status,
            change.name,
            change.from.dimmed(),
            change.to.green()
        );
    }

    fn finished(&mut self, target: &Path, changes: usize, written: bool, dry_run: bool) {
        if self.quiet {
            return;
        }

        let target = display_path(target);
        if changes == 0 && !written {
            println!("{}", format!("No changes needed: {} already matches", target).yellow());
            return;
        }

        let plural = if changes == 1 { "y" } else { "ies" };
        if dry_run {
            println!(
                "\n{} dependenc{} in {} would change. Run without {} to apply.",
                changes.to_string().cyan().bold(),
                plural,
                target,
                "--dry-run".cyan()
            );
        } else {
            println!(
                "{:>12} {} ({} dependenc{} updated)",
                "Finished".green().bold(),
                target,
                changes,
                plural
            );
        }
    }

    fn error(&mut self, err: &MatchError) {
        eprintln!("{} {}", "Error:".red().bold(), err);
    }
}

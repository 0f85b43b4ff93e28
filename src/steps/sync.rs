//! Orchestration of a version sync between two Go modules.
//!
//! Both manifests are fully parsed before anything is written, and the
//! single target write goes through a `Transaction`.

use crate::error::{Result, Role};
use crate::fs::transaction::Transaction;
use crate::gomod::{GoMod, VersionChange, encode_block, merge_versions};
use crate::report::Reporter;
use crate::verify::preflight_checks;

use clap::Args;
use std::convert::Infallible;
use std::path::PathBuf;

/// Arguments for a sync run.
#[derive(Args, Debug, Clone, Default)]
pub struct SyncArgs {
    /// Path to the module from which the versions are read
    #[arg(long, value_name = "DIR", value_parser = module_dir)]
    pub get: Option<PathBuf>,

    /// Path to the module whose go.mod versions are rewritten
    #[arg(long, value_name = "DIR", value_parser = module_dir)]
    pub set: Option<PathBuf>,

    /// Show what would change without writing the target go.mod
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Do not print the list of updated dependencies
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Accepts any value, including an empty one, so that an empty flag is
/// reported as a missing argument by the pre-flight checks.
fn module_dir(value: &str) -> std::result::Result<PathBuf, Infallible> {
    Ok(PathBuf::from(value))
}

/// Outcome of a successful sync.
#[derive(Debug, Clone)]
pub struct SyncSummary {
    /// The target `go.mod`.
    pub target: PathBuf,
    /// Target dependencies whose version changed, in target order.
    pub changes: Vec<VersionChange>,
    /// Whether the target file was rewritten.
    pub written: bool,
}

/// Executes a version sync.
///
/// ## Phases
///
/// 1. Check both module directories and locate their `go.mod`
/// 2. Read and parse the source, then the target manifest
/// 3. Merge source versions onto the target's entries
/// 4. Rebuild the target text and commit the write
///
/// Any error is reported once through `reporter` and returned; no file is
/// written unless every earlier phase succeeded.
pub fn execute(args: &SyncArgs, reporter: &mut dyn Reporter) -> Result<SyncSummary> {
    sync(args, reporter).inspect_err(|e| reporter.error(e))
}

fn sync(args: &SyncArgs, reporter: &mut dyn Reporter) -> Result<SyncSummary> {
    let (source_path, target_path) = preflight_checks(args.get.as_deref(), args.set.as_deref())?;

    let source = GoMod::read(&source_path)?;
    let (_, source_reqs) = source.parse(Role::Source)?;
    log::debug!(
        "{} pins {} dependencies",
        source.path.display(),
        source_reqs.len()
    );

    let target = GoMod::read(&target_path)?;
    let (block, mut target_reqs) = target.parse(Role::Target)?;
    log::debug!(
        "{} lists {} dependencies",
        target.path.display(),
        target_reqs.len()
    );

    let changes = merge_versions(&mut target_reqs, &source_reqs);
    for change in &changes {
        reporter.change(change, args.dry_run);
    }

    let rewritten = encode_block(&block, &target_reqs);

    let mut txn = Transaction::new(args.dry_run);
    txn.update_file(target.path.clone(), &target.text, rewritten)?;
    let written = txn.commit()?;
    reporter.finished(&target.path, changes.len(), written, args.dry_run);

    log::info!(
        "{} dependencies updated in {}",
        changes.len(),
        target.path.display()
    );

    Ok(SyncSummary {
        target: target.path,
        changes,
        written,
    })
}

//! Staged manifest writes.
//!
//! Nothing touches the disk until `commit()`. The caller hands over the
//! content it already read, so unchanged files are skipped without a second
//! read and a failed write can put the original back.
//!
//! ## Example
//!
//! ```no_run
//! # use match_versions::fs::Transaction;
//! # use std::path::PathBuf;
//! # fn example() -> match_versions::Result<()> {
//! let original = std::fs::read_to_string("go.mod")?;
//! let mut txn = Transaction::new(false);
//!
//! txn.update_file(PathBuf::from("go.mod"), &original, "module a\n".into())?;
//!
//! txn.commit()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{MatchError, Result};

use std::fs;
use std::path::PathBuf;

/// A staged file rewrite.
///
/// Stores original content for restoring after a failed write.
#[derive(Debug, Clone)]
pub struct FileUpdate {
    pub path: PathBuf,
    pub original: String,
    pub new: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransactionState {
    /// Nothing staged yet.
    Building,
    /// A rewrite is waiting for `commit()`.
    Staged,
    /// Commit finished (or was a dry run).
    Committed,
    /// The write failed; the original content was written back.
    Failed,
}

/// Transaction coordinating the rewrite of one manifest.
///
/// When `dry_run = true`, the update is staged and logged but never written.
#[must_use = "Transaction must be committed"]
pub struct Transaction {
    update: Option<FileUpdate>,
    dry_run: bool,
    state: TransactionState,
}

impl Transaction {
    pub fn new(dry_run: bool) -> Self {
        Self {
            update: None,
            dry_run,
            state: TransactionState::Building,
        }
    }

    /// Stages a file update.
    ///
    /// `original` is the content the caller read from `path`. If it equals
    /// `new_content`, nothing is staged. Returns whether anything was staged.
    pub fn update_file(
        &mut self,
        path: PathBuf,
        original: &str,
        new_content: String,
    ) -> Result<bool> {
        if self.state != TransactionState::Building {
            return Err(MatchError::Other(anyhow::anyhow!(
                "Cannot stage {} after another update or commit",
                path.display()
            )));
        }

        if original == new_content {
            log::debug!("Content unchanged, skipping: {}", path.display());
            return Ok(false);
        }

        log::debug!("Staging update for: {}", path.display());
        if self.dry_run {
            log::info!("Would update: {}", path.display());
        }

        self.update = Some(FileUpdate {
            path,
            original: original.to_string(),
            new: new_content,
        });
        self.state = TransactionState::Staged;

        Ok(true)
    }

    /// Writes the staged update. Returns whether the file was written.
    ///
    /// If the write fails, the original content is written back before the
    /// error is returned.
    pub fn commit(&mut self) -> Result<bool> {
        if matches!(
            self.state,
            TransactionState::Committed | TransactionState::Failed
        ) {
            return Err(MatchError::Other(anyhow::anyhow!(
                "Transaction already committed"
            )));
        }

        let update = match self.update.take() {
            Some(update) if !self.dry_run => update,
            _ => {
                self.state = TransactionState::Committed;
                return Ok(false);
            }
        };

        if let Err(e) = fs::write(&update.path, &update.new) {
            self.state = TransactionState::Failed;
            let write_err = format!("Failed to write {}: {}", update.path.display(), e);

            if let Err(restore_err) = fs::write(&update.path, &update.original) {
                return Err(MatchError::RollbackFailed(format!(
                    "{}; failed to restore {}: {}",
                    write_err,
                    update.path.display(),
                    restore_err
                )));
            }
            log::info!("Restored {}", update.path.display());
            return Err(MatchError::Io(std::io::Error::new(e.kind(), write_err)));
        }

        log::debug!("Updated: {}", update.path.display());
        self.state = TransactionState::Committed;
        Ok(true)
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if self.state == TransactionState::Staged && !self.dry_run {
            log::warn!("Transaction dropped without commit");
        }
    }
}

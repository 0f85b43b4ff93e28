//! `go.mod` dependency block handling.
//!
//! - **`block`**: finding the `require ( ... )` block and splicing a new one in
//! - **`entry`**: parsing block lines into ordered dependency entries
//! - **`merge`**: copying versions from one set of entries onto another
//!
//! Only the single-block layout is understood. Comments inside the block,
//! single-line `require` statements and `replace`/`exclude` directives are
//! left to whatever text surrounds the block.

pub mod block;
pub mod entry;
pub mod merge;

pub use block::{RequireBlock, encode_block, extract_block};
pub use entry::{Requirements, parse_entries};
pub use merge::{VersionChange, merge_versions};

use crate::error::{Result, Role};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of a Go module manifest.
pub const MANIFEST_FILE: &str = "go.mod";

/// A `go.mod` file read into memory.
#[derive(Debug, Clone)]
pub struct GoMod {
    pub path: PathBuf,
    pub text: String,
}

impl GoMod {
    /// Reads the manifest at `path`.
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            log::debug!("Failed to read {}: {}", path.display(), e);
            std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            )
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Splits the manifest around its require block and parses the entries.
    ///
    /// Errors are attributed to this manifest's `role`.
    pub fn parse(&self, role: Role) -> Result<(RequireBlock<'_>, Requirements)> {
        let parsed = extract_block(&self.text)
            .and_then(|block| parse_entries(block.body).map(|reqs| (block, reqs)));

        parsed.map_err(|e| e.in_manifest(role, &self.path))
    }
}

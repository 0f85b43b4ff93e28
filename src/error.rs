//! Error types for match-versions.
//!
//! All operations return `Result<T>` which aliases `Result<T, MatchError>`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which side of the sync a manifest belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Manifest the versions are read from (`--get`).
    Source,
    /// Manifest that gets rewritten (`--set`).
    Target,
}

impl Role {
    /// Name of the CLI flag that selects this manifest.
    pub fn flag(self) -> &'static str {
        match self {
            Role::Source => "get",
            Role::Target => "set",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// Errors from version sync operations.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Required path option absent or empty.
    #[error("the '--{0}' flag must be set to a module directory")]
    MissingArgument(&'static str),

    /// Given directory does not exist.
    #[error("directory '{0}' does not exist")]
    PathNotFound(PathBuf),

    /// Given path exists but is a file.
    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    /// Directory exists but has no manifest.
    #[error("go.mod file does not exist at '{0}'")]
    ManifestNotFound(PathBuf),

    /// No recognizable `require ( ... )` block.
    #[error("malformed manifest: {0}")]
    MalformedManifest(String),

    /// A block line that cannot be split into name and version.
    #[error("malformed entry on line {line} of the require block: '{content}'")]
    MalformedEntry { line: usize, content: String },

    /// The same dependency is listed twice in one block.
    #[error("dependency '{0}' is listed more than once in the require block")]
    DuplicateEntry(String),

    /// A parse error attributed to one of the two manifests.
    #[error("error parsing {role} go.mod file {}: {source}", .path.display())]
    InManifest {
        role: Role,
        path: PathBuf,
        #[source]
        source: Box<MatchError>,
    },

    /// Restoring files after a failed write did not succeed.
    #[error("Rollback failed: {0}")]
    RollbackFailed(String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MatchError {
    /// Attributes this error to the manifest at `path`.
    pub fn in_manifest(self, role: Role, path: impl Into<PathBuf>) -> Self {
        MatchError::InManifest {
            role,
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Strips any manifest attribution and returns the underlying error.
    pub fn root(&self) -> &MatchError {
        match self {
            MatchError::InManifest { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type alias for match-versions operations.
pub type Result<T> = std::result::Result<T, MatchError>;

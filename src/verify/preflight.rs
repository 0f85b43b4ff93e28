//! Pre-flight checks performed before any manifest is read.
//!
//! These checks make sure both `--get` and `--set` point at Go module
//! directories. No file is read or modified here.

use crate::error::{MatchError, Result, Role};
use crate::gomod::MANIFEST_FILE;
use std::path::{Path, PathBuf};

/// Resolves the `go.mod` inside the module directory given for `role`.
///
/// # Errors
///
/// - `MissingArgument` if the flag was absent or empty
/// - `PathNotFound` if the directory does not exist
/// - `NotADirectory` if the path is a file
/// - `ManifestNotFound` if the directory has no `go.mod`
pub fn locate_manifest(role: Role, dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match dir {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => return Err(MatchError::MissingArgument(role.flag())),
    };

    if !dir.exists() {
        return Err(MatchError::PathNotFound(dir.to_path_buf()));
    }

    if !dir.is_dir() {
        return Err(MatchError::NotADirectory(dir.to_path_buf()));
    }

    let manifest = dir.join(MANIFEST_FILE);
    if !manifest.is_file() {
        return Err(MatchError::ManifestNotFound(dir.to_path_buf()));
    }

    log::debug!("{} manifest: {}", role, manifest.display());
    Ok(manifest)
}

/// Validates both module directories and returns `(source, target)` manifests.
///
/// Both flags are checked for presence before either path is touched, so a
/// run missing `--set` reports that rather than a problem with `--get`.
pub fn preflight_checks(get: Option<&Path>, set: Option<&Path>) -> Result<(PathBuf, PathBuf)> {
    for (role, dir) in [(Role::Source, get), (Role::Target, set)] {
        if dir.is_none_or(|d| d.as_os_str().is_empty()) {
            log::debug!("--{} was not given", role.flag());
            return Err(MatchError::MissingArgument(role.flag()));
        }
    }

    let source = locate_manifest(Role::Source, get)?;
    let target = locate_manifest(Role::Target, set)?;

    if source == target {
        log::info!("--get and --set name the same module; nothing will change");
    }

    Ok((source, target))
}

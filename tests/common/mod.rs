//! Shared helpers for match-versions integration tests.
//!
//! Tests create real module directories with `go.mod` files and run the
//! binary against them.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SOURCE_GOMOD: &str = r#"module example.com/platform

go 1.22

require (
	github.com/google/uuid v1.6.0
	github.com/pkg/errors v0.9.1
	golang.org/x/sync v0.7.0 // indirect
	gopkg.in/yaml.v3 v3.0.1
)
"#;

pub const TARGET_GOMOD: &str = r#"module example.com/service

go 1.21

require (
	gopkg.in/yaml.v3 v3.0.0
	github.com/sirupsen/logrus v1.9.3
	github.com/google/uuid v1.3.0
	golang.org/x/sync v0.5.0 // indirect
)

replace example.com/internal => ../internal
"#;

/// Creates a module directory `name` under `root` holding `gomod`.
#[allow(unused)]
pub fn create_module(root: &Path, name: &str, gomod: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("go.mod"), gomod).unwrap();
    dir
}

/// Creates a `get` and a `set` module with the default manifests.
#[allow(unused)]
pub fn create_test_modules() -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().unwrap();
    let get = create_module(temp.path(), "platform", SOURCE_GOMOD);
    let set = create_module(temp.path(), "service", TARGET_GOMOD);
    (temp, get, set)
}

#[allow(unused)]
pub fn read_gomod(dir: &Path) -> String {
    fs::read_to_string(dir.join("go.mod")).unwrap()
}

/// Runs `match-versions --get <get> --set <set>` plus `extra_args`.
pub fn run_match(get: &Path, set: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("match-versions");
    cmd.arg("--get").arg(get).arg("--set").arg(set).args(extra_args);

    cmd.assert()
}

/// Runs the binary with raw arguments.
#[allow(unused)]
pub fn run_raw(args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("match-versions");
    cmd.args(args);

    cmd.assert()
}

//! Source-tree helpers shared by the architecture tests.
//!
//! Paths are resolved from the workspace root, so the tests behave the same
//! whichever directory cargo runs them from.

use std::fs;
use std::path::{Path, PathBuf};

/// Find the workspace root by walking up to the `Cargo.toml` with `[workspace]`.
pub fn workspace_root() -> PathBuf {
    let start = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let mut dir = start.as_path();
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return start,
        }
    }
}

/// The `crates/` directory of the workspace.
pub fn crates_dir() -> PathBuf {
    workspace_root().join("crates")
}

/// All `.rs` files under `dir`, skipping `target/` directories.
pub fn rust_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != "target")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Whether `path` holds test code (a `tests/` directory or a `*_tests.rs` file).
pub fn is_test_path(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    path_str.contains("/tests/") || path_str.ends_with("_tests.rs") || path_str.ends_with("/tests.rs")
}

/// Count lines of code, excluding blank lines and comment-only lines.
pub fn count_loc(content: &str) -> usize {
    let mut count = 0;
    let mut in_block_comment = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with("/*") {
            in_block_comment = true;
        }
        if in_block_comment {
            if trimmed.ends_with("*/") {
                in_block_comment = false;
            }
            continue;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        count += 1;
    }

    count
}

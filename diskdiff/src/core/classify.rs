// src/core/classify.rs
use std::path::Path;

/// Checks whether a file path belongs to any of the given directory
/// prefixes: either as a direct child or as a descendant.
///
/// Matching is pure string comparison on the parent directory. No
/// normalization, symlink resolution or trailing-slash handling happens
/// here; callers must supply canonical absolute prefixes without trailing
/// separators.
#[must_use]
pub fn belongs_to(path: &Path, prefixes: &[String]) -> bool {
    prefixes
        .iter()
        .any(|prefix| is_file_of_directory(path, prefix))
}

fn is_file_of_directory(path: &Path, directory: &str) -> bool {
    let Some(parent) = path.parent().and_then(Path::to_str) else {
        return false;
    };
    parent == directory || parent.starts_with(directory)
}

/// Log detection is independent of the category rule lists: a file counts
/// as a log when its parent directory contains "logs", or its base name
/// contains "log" without containing "login".
#[must_use]
pub fn is_log_file(path: &Path) -> bool {
    let parent = path.parent().and_then(Path::to_str).unwrap_or_default();
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    parent.contains("logs") || (name.contains("log") && !name.contains("login"))
}

// src/core/walk.rs
use crate::error::DiffError;
use crate::utils::status_line;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// What the walk produced: the flat candidate list plus the total number
/// of regular files discovered, kept separately for the report summary.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub candidates: Vec<PathBuf>,
    pub files_examined: u64,
}

/// Enumerates every regular file under the given roots.
///
/// Symbolic links are skipped unconditionally: never followed, never
/// reported. A directory whose full path appears in `ignored_dirs` (exact
/// match, not prefix match) prunes its whole subtree. Any path containing
/// one of the `dodge` keywords is skipped, files and directories alike.
///
/// # Errors
///
/// Returns [`DiffError::Walk`] when a directory cannot be listed, for
/// example on permission failures. Entries that vanish between listing and
/// stat are omitted silently; the tree is live and that race is expected.
pub fn walk(
    roots: &[PathBuf],
    ignored_dirs: &[String],
    dodge: &[String],
) -> Result<WalkOutcome, DiffError> {
    status_line("Indexing files...");
    debug!(?roots, "starting walk");

    let pruned: HashSet<&Path> = ignored_dirs.iter().map(Path::new).collect();
    let mut outcome = WalkOutcome::default();

    for root in roots {
        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !should_prune(entry, &pruned, dodge))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if vanished(&err) => continue,
                Err(err) => {
                    let path = err.path().map_or_else(|| root.clone(), Path::to_path_buf);
                    return Err(DiffError::Walk {
                        path,
                        source: err.into(),
                    });
                }
            };
            if entry.file_type().is_file() {
                outcome.candidates.push(entry.into_path());
                outcome.files_examined = outcome.files_examined.saturating_add(1);
            }
        }
    }

    debug!(files = outcome.files_examined, "walk finished");
    Ok(outcome)
}

fn should_prune(entry: &walkdir::DirEntry, pruned: &HashSet<&Path>, dodge: &[String]) -> bool {
    if entry.path_is_symlink() {
        return true;
    }
    if entry.file_type().is_dir() && pruned.contains(entry.path()) {
        return true;
    }
    if !dodge.is_empty() {
        if let Some(path_str) = entry.path().to_str() {
            if dodge.iter().any(|keyword| path_str.contains(keyword.as_str())) {
                return true;
            }
        }
    }
    false
}

fn vanished(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}

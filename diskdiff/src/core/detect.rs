// src/core/detect.rs
use crate::error::DiffError;
use crate::models::{CaptureWindow, ChangeKind, EnabledKinds, KindLists};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The four metadata timestamps of a file, as fractional seconds since
/// the epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FileTimes {
    pub born: f64,
    pub modified: f64,
    pub changed: f64,
    pub accessed: f64,
}

impl FileTimes {
    #[must_use]
    pub const fn for_kind(&self, kind: ChangeKind) -> f64 {
        match kind {
            ChangeKind::Born => self.born,
            ChangeKind::Modified => self.modified,
            ChangeKind::Changed => self.changed,
            ChangeKind::Accessed => self.accessed,
        }
    }

    /// Reads the timestamps from filesystem metadata.
    ///
    /// There is no portable birth time; on Unix the inode change time is
    /// the closest proxy, so `born` and `changed` observe the same value.
    ///
    /// # Errors
    ///
    /// Propagates the underlying stat failure, including `NotFound` for
    /// files deleted since enumeration.
    #[cfg(unix)]
    pub fn read(path: &Path) -> io::Result<Self> {
        use std::os::unix::fs::MetadataExt as _;

        let meta = fs::metadata(path)?;
        let changed = stamp(meta.ctime(), meta.ctime_nsec());
        Ok(Self {
            born: changed,
            modified: stamp(meta.mtime(), meta.mtime_nsec()),
            changed,
            accessed: stamp(meta.atime(), meta.atime_nsec()),
        })
    }

    #[cfg(not(unix))]
    pub fn read(path: &Path) -> io::Result<Self> {
        let meta = fs::metadata(path)?;
        let modified = meta.modified().map(system_stamp).unwrap_or_default();
        let born = meta.created().map(system_stamp).unwrap_or(modified);
        Ok(Self {
            born,
            modified,
            changed: born,
            accessed: meta.accessed().map(system_stamp).unwrap_or_default(),
        })
    }
}

#[cfg(unix)]
fn stamp(secs: i64, nanos: i64) -> f64 {
    secs as f64 + nanos as f64 / 1_000_000_000.0
}

#[cfg(not(unix))]
fn system_stamp(time: std::time::SystemTime) -> f64 {
    time.duration_since(std::time::UNIX_EPOCH)
        .map_or(0.0, |elapsed| elapsed.as_secs_f64())
}

/// Picks the change kind a file is reported under, if any.
///
/// Kinds are tried in the fixed order Born, Modified, Changed, Accessed;
/// the first enabled kind whose timestamp lies strictly inside the window
/// wins. A file both born and modified inside the window is therefore
/// recorded only as Born.
#[must_use]
pub fn first_kind(
    times: &FileTimes,
    window: &CaptureWindow,
    enabled: EnabledKinds,
) -> Option<ChangeKind> {
    ChangeKind::ALL
        .into_iter()
        .find(|&kind| enabled.contains(kind) && window.contains(times.for_kind(kind)))
}

/// Tests every candidate against the capture window and collects the
/// touched paths per change kind, in candidate order.
///
/// Paths listed in `ignored_files` (exact match) are skipped entirely.
/// Candidates deleted since the walk are skipped silently.
///
/// # Errors
///
/// Returns [`DiffError::Walk`] when a candidate cannot be stat-ed for any
/// reason other than having vanished.
pub fn detect(
    candidates: &[PathBuf],
    window: &CaptureWindow,
    ignored_files: &HashSet<PathBuf>,
    enabled: EnabledKinds,
) -> Result<KindLists, DiffError> {
    let mut touched = KindLists::new();

    for path in candidates {
        if ignored_files.contains(path) {
            continue;
        }
        let times = match FileTimes::read(path) {
            Ok(times) => times,
            Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
            Err(err) => {
                return Err(DiffError::Walk {
                    path: path.clone(),
                    source: err,
                });
            }
        };
        if let Some(kind) = first_kind(&times, window, enabled) {
            touched.list_mut(kind).push(path.clone());
        }
    }

    debug!(touched = touched.len(), "detection finished");
    Ok(touched)
}

// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds surfaced by the pipeline.
///
/// A non-zero exit from the observed command is not represented here: it is
/// reported to the user and categorization proceeds with whatever window
/// boundaries were captured.
#[derive(Debug, Error)]
pub enum DiffError {
    /// A directory could not be listed or a file could not be stat-ed.
    /// Entries that vanish mid-scan are skipped silently and never raise
    /// this variant.
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The observed command could not be launched at all.
    #[error("failed to launch command {command:?}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The report transcript could not be created or appended.
    #[error("failed to write report log {}: {source}", path.display())]
    LogWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

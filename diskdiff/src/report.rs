// src/report.rs
use crate::error::DiffError;
use crate::models::window::epoch_now;
use crate::models::{CategorizedReport, Category, ChangeKind, KindLists};
use crate::utils::{group_thousands, status_line};
use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

// 256-color console palette, one color per bucket.
pub const GREY: &str = "\x1b[38;5;242m";
pub const RED: &str = "\x1b[38;5;160m";
pub const YELLOW: &str = "\x1b[38;5;190m";
pub const GREEN: &str = "\x1b[38;5;46m";
pub const BLUE: &str = "\x1b[38;5;39m";
pub const RESET: &str = "\x1b[0m";

const fn color_for(category: Category) -> &'static str {
    match category {
        Category::Ignored => GREY,
        Category::Unimportant => RED,
        Category::Notable => YELLOW,
        Category::Key => GREEN,
        Category::Logs => BLUE,
        Category::Uncategorized => RESET,
    }
}

/// Derives the transcript path from the observed command, lower-cased with
/// spaces and path separators replaced, or from the capture timestamp in
/// manual mode.
#[must_use]
pub fn log_path_for(log_dir: &Path, command: &[String], manual: bool) -> PathBuf {
    if manual {
        return log_dir.join(format!("manual-{}.log", epoch_now()));
    }
    let name = command.join(" ").to_lowercase().replace([' ', '/'], "_");
    log_dir.join(format!("{name}.log"))
}

/// Renders the categorized report: one colored console section per
/// non-empty bucket, plus an equivalent plain-text transcript.
///
/// # Errors
///
/// Returns [`DiffError::LogWrite`] when the transcript cannot be created
/// or appended.
pub fn render(
    report: &CategorizedReport,
    files_examined: u64,
    log_path: &Path,
) -> Result<(), DiffError> {
    status_line(&format!(
        "Files examined: {}\n",
        group_thousands(files_examined)
    ));

    // TODO: keep prior transcripts instead of truncating on every run
    truncate(log_path)?;

    for category in Category::RENDER_ORDER {
        let bucket = report.bucket(category);
        if bucket.is_empty() {
            continue;
        }
        render_bucket(category, bucket, log_path)?;
    }
    println!();
    Ok(())
}

fn render_bucket(
    category: Category,
    bucket: &KindLists,
    log_path: &Path,
) -> Result<(), DiffError> {
    let color = color_for(category);
    println!("\n{}:", category.tag());
    append(log_path, &format!("\n_____{}_____", category.tag()))?;

    for kind in ChangeKind::ALL {
        for path in bucket.list(kind) {
            println!("{:>10}: {color}{}{RESET}", kind.label(), path.display());
            append(
                log_path,
                &format!("{:>10}: {}", kind.label(), path.display()),
            )?;
        }
    }
    Ok(())
}

fn truncate(path: &Path) -> Result<(), DiffError> {
    fs::write(path, "").map_err(|source| DiffError::LogWrite {
        path: path.to_path_buf(),
        source,
    })
}

// The handle is opened and closed around each write rather than held open
// across the pipeline.
fn append(path: &Path, line: &str) -> Result<(), DiffError> {
    let log_write = |source| DiffError::LogWrite {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(log_write)?;
    writeln!(file, "{line}").map_err(log_write)
}

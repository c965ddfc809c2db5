// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod exec;
pub mod models;
pub mod report;
pub mod utils;

pub use cli::Args;
pub use config::Config;
pub use error::DiffError;

use anyhow::{Context as _, Result, ensure};
use models::OpenCapture;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Runs the full pipeline: open the capture window, run the observed
/// operation (or wait for the user in manual mode), close the window, then
/// walk, detect, categorize and render.
///
/// # Errors
///
/// This function may return an error if:
/// * The configuration file cannot be read or parsed
/// * A walk root is not a directory
/// * The observed command cannot be launched
/// * A directory cannot be listed or a file cannot be stat-ed
/// * The report transcript cannot be written
pub fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    fs::create_dir_all(&config.log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            config.log_dir.display()
        )
    })?;

    let manual = args.manual_mode();
    let log_path = report::log_path_for(&config.log_dir, &args.command, manual);

    let roots: Vec<PathBuf> = if args.dirs.is_empty() {
        config.dirs_to_check.clone()
    } else {
        args.dirs.clone()
    };
    for root in &roots {
        ensure!(root.is_dir(), "Not a valid directory: {}", root.display());
    }

    let capture = OpenCapture::begin();
    if manual {
        exec::wait_for_enter().context("Failed to read stdin in manual mode")?;
    } else {
        exec::run_command(&args.command)?;
    }
    let window = capture.close();
    debug!(
        start = window.start(),
        end = window.end(),
        "capture window closed"
    );

    let outcome = core::walk::walk(&roots, &config.dir_categories.ignored, &args.dodge)?;

    let ignored_files: HashSet<PathBuf> =
        config.file_categories.ignored.iter().cloned().collect();
    let touched = core::detect::detect(
        &outcome.candidates,
        &window,
        &ignored_files,
        args.enabled_kinds(),
    )?;
    utils::status_line(&format!(
        "Categorized files: {}\n",
        utils::group_thousands(u64::try_from(touched.len()).unwrap_or(u64::MAX))
    ));

    let categorized = core::categorize::categorize(touched, &config.dir_categories);
    report::render(&categorized, outcome.files_examined, &log_path)?;
    Ok(())
}

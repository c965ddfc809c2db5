// tests/integration_tests/pipeline_test.rs
use crate::common::{create_test_file, rules_for, settle};
use anyhow::Result;
use diskdiff::core::categorize::categorize;
use diskdiff::core::detect::detect;
use diskdiff::core::walk::walk;
use diskdiff::models::{EnabledKinds, OpenCapture};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_files_born_during_window_reach_their_buckets() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "etc/existing.conf", "already here")?;
    settle();

    let capture = OpenCapture::begin();
    let key_file = create_test_file(dir.path(), "etc/new.conf", "written in window")?;
    let log_file = create_test_file(dir.path(), "var/log/app.log", "log line")?;
    let plain_file = create_test_file(dir.path(), "srv/data.bin", "payload")?;
    settle();
    let window = capture.close();

    let outcome = walk(&[dir.path().to_path_buf()], &[], &[])?;
    assert_eq!(outcome.files_examined, 4, "all regular files are examined");

    let touched = detect(
        &outcome.candidates,
        &window,
        &HashSet::new(),
        EnabledKinds::default(),
    )?;
    assert_eq!(touched.len(), 3, "the pre-existing file is untouched");

    let report = categorize(touched, &rules_for(dir.path()));
    assert_eq!(report.key.born, vec![key_file]);
    assert_eq!(report.logs.born, vec![log_file]);
    assert_eq!(report.uncategorized.born, vec![plain_file]);
    assert!(report.key.modified.is_empty());
    Ok(())
}

#[test]
fn test_modification_with_born_disabled_reports_modified() -> Result<()> {
    let dir = TempDir::new()?;
    let conf = create_test_file(dir.path(), "etc/foo.conf", "v1")?;
    settle();

    let capture = OpenCapture::begin();
    fs::write(&conf, "v2")?;
    settle();
    let window = capture.close();

    let outcome = walk(&[dir.path().to_path_buf()], &[], &[])?;
    let enabled = EnabledKinds {
        born: false,
        ..EnabledKinds::default()
    };
    let touched = detect(&outcome.candidates, &window, &HashSet::new(), enabled)?;
    assert!(touched.born.is_empty());
    assert_eq!(touched.modified, vec![conf.clone()]);

    let report = categorize(touched, &rules_for(dir.path()));
    assert_eq!(report.key.modified, vec![conf]);
    Ok(())
}

#[test]
fn test_rewrite_inside_window_is_born_first() -> Result<()> {
    let dir = TempDir::new()?;
    let conf = create_test_file(dir.path(), "etc/foo.conf", "v1")?;
    settle();

    let capture = OpenCapture::begin();
    fs::write(&conf, "v2")?;
    settle();
    let window = capture.close();

    // Rewriting updates both the change time (Born's proxy) and the modify
    // time; first-kind-wins means the file shows up once, as Born.
    let outcome = walk(&[dir.path().to_path_buf()], &[], &[])?;
    let touched = detect(
        &outcome.candidates,
        &window,
        &HashSet::new(),
        EnabledKinds::default(),
    )?;
    assert_eq!(touched.born, vec![conf]);
    assert!(touched.modified.is_empty(), "never reported under two kinds");
    Ok(())
}

#[test]
fn test_ignored_dir_hides_changes_under_it() -> Result<()> {
    let dir = TempDir::new()?;
    fs::create_dir(dir.path().join("proc"))?;
    settle();

    let capture = OpenCapture::begin();
    create_test_file(dir.path(), "proc/1/status", "pid data")?;
    create_test_file(dir.path(), "etc/foo.conf", "kept")?;
    settle();
    let window = capture.close();

    let ignored = vec![dir.path().join("proc").to_string_lossy().into_owned()];
    let outcome = walk(&[dir.path().to_path_buf()], &ignored, &[])?;
    let touched = detect(
        &outcome.candidates,
        &window,
        &HashSet::new(),
        EnabledKinds::default(),
    )?;
    assert_eq!(touched.len(), 1);
    assert!(
        touched.born[0].ends_with("etc/foo.conf"),
        "only the file outside the pruned subtree is reported"
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlink_into_key_dir_is_never_reported() -> Result<()> {
    let dir = TempDir::new()?;
    settle();

    let capture = OpenCapture::begin();
    let target = create_test_file(dir.path(), "etc/target.conf", "real")?;
    std::os::unix::fs::symlink(&target, dir.path().join("home_link.conf"))?;
    settle();
    let window = capture.close();

    let outcome = walk(&[dir.path().to_path_buf()], &[], &[])?;
    let touched = detect(
        &outcome.candidates,
        &window,
        &HashSet::new(),
        EnabledKinds::default(),
    )?;
    let report = categorize(touched, &rules_for(dir.path()));

    let everywhere: Vec<&PathBuf> = [
        &report.logs,
        &report.ignored,
        &report.unimportant,
        &report.notable,
        &report.key,
        &report.uncategorized,
    ]
    .into_iter()
    .flat_map(|bucket| {
        bucket
            .born
            .iter()
            .chain(&bucket.modified)
            .chain(&bucket.changed)
            .chain(&bucket.accessed)
    })
    .collect();

    assert!(
        everywhere.iter().all(|path| !path.ends_with("home_link.conf")),
        "the symlink itself never appears in any bucket"
    );
    assert_eq!(report.key.born, vec![target], "the target is still reported");
    Ok(())
}

#[test]
fn test_ignored_file_is_excluded_by_exact_path() -> Result<()> {
    let dir = TempDir::new()?;
    settle();

    let capture = OpenCapture::begin();
    let state = create_test_file(dir.path(), "var/state.bin", "churn")?;
    let other = create_test_file(dir.path(), "var/other.bin", "data")?;
    settle();
    let window = capture.close();

    let outcome = walk(&[dir.path().to_path_buf()], &[], &[])?;
    let ignored_files: HashSet<PathBuf> = [state].into_iter().collect();
    let touched = detect(
        &outcome.candidates,
        &window,
        &ignored_files,
        EnabledKinds::default(),
    )?;
    assert_eq!(touched.born, vec![other]);
    Ok(())
}

// tests/integration_tests/report_test.rs
use crate::common::{create_test_file, rules_for, settle};
use anyhow::Result;
use diskdiff::core::categorize::categorize;
use diskdiff::core::detect::detect;
use diskdiff::core::walk::walk;
use diskdiff::models::{EnabledKinds, OpenCapture};
use diskdiff::report::{log_path_for, render};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_full_run_produces_a_transcript() -> Result<()> {
    let dir = TempDir::new()?;
    settle();

    let capture = OpenCapture::begin();
    create_test_file(dir.path(), "etc/new.conf", "in window")?;
    create_test_file(dir.path(), "tmp/build.o", "artifact")?;
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

    let log_dir = dir.path().join("logs");
    fs::create_dir_all(&log_dir)?;
    let command = vec![String::from("touch"), String::from("files")];
    let log_path = log_path_for(&log_dir, &command, false);
    assert!(log_path.ends_with("touch_files.log"));

    render(&report, outcome.files_examined, &log_path)?;

    let transcript = fs::read_to_string(&log_path)?;
    assert!(transcript.contains("_____Key_____"));
    assert!(transcript.contains("etc/new.conf"));
    assert!(transcript.contains("_____Notable_____"));
    assert!(transcript.contains("tmp/build.o"));
    assert!(
        transcript.find("_____Notable_____") < transcript.find("_____Key_____"),
        "buckets render in the fixed console order"
    );
    Ok(())
}

#[test]
fn test_rendering_an_empty_report_writes_an_empty_transcript() -> Result<()> {
    let dir = TempDir::new()?;
    settle();

    let capture = OpenCapture::begin();
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

    let log_path = dir.path().join("empty.log");
    render(&report, outcome.files_examined, &log_path)?;

    let transcript = fs::read_to_string(&log_path)?;
    assert!(transcript.is_empty(), "no buckets, no sections");
    Ok(())
}

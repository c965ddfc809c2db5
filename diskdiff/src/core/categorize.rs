// src/core/categorize.rs
use crate::config::DirRules;
use crate::core::classify::{belongs_to, is_log_file};
use crate::models::{CategorizedReport, ChangeKind, KindLists};
use std::path::{Path, PathBuf};

/// Drains the touched lists into the report buckets.
///
/// Passes run per change kind in a fixed, significant order: logs first,
/// then ignored, key, notable, unimportant; whatever survives every pass
/// stays uncategorized. Each pass takes ownership of its source list and
/// partitions it, so a (path, kind) slot can only ever land in one bucket.
#[must_use]
pub fn categorize(mut touched: KindLists, rules: &DirRules) -> CategorizedReport {
    let mut report = CategorizedReport::new();

    for kind in ChangeKind::ALL {
        let mut remaining = touched.take(kind);
        remaining = drain_into(remaining, report.logs.list_mut(kind), is_log_file);
        remaining = drain_into(remaining, report.ignored.list_mut(kind), |path| {
            belongs_to(path, &rules.ignored)
        });
        remaining = drain_into(remaining, report.key.list_mut(kind), |path| {
            belongs_to(path, &rules.key)
        });
        remaining = drain_into(remaining, report.notable.list_mut(kind), |path| {
            belongs_to(path, &rules.notable)
        });
        remaining = drain_into(remaining, report.unimportant.list_mut(kind), |path| {
            belongs_to(path, &rules.unimportant)
        });
        *report.uncategorized.list_mut(kind) = remaining;
    }

    report
}

/// Moves matching paths into `matched` and returns the leftovers for the
/// next pass, preserving order on both sides.
fn drain_into(
    source: Vec<PathBuf>,
    matched: &mut Vec<PathBuf>,
    predicate: impl Fn(&Path) -> bool,
) -> Vec<PathBuf> {
    let mut remainder = Vec::with_capacity(source.len());
    for path in source {
        if predicate(&path) {
            matched.push(path);
        } else {
            remainder.push(path);
        }
    }
    remainder
}

//! Plain-text and JSON renderings of a comparison result.

use crate::diff::{CompareOptions, CompareResult, DiffStats, RenderRow, StyleClass};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything written to a saved report
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub options: &'a CompareOptions,
    pub stats: DiffStats,
    pub left_rows: &'a [RenderRow],
    pub right_rows: &'a [RenderRow],
}

impl<'a> Report<'a> {
    pub fn new(result: &'a CompareResult, options: &'a CompareOptions) -> Self {
        Self {
            generated_at: Utc::now(),
            options,
            stats: result.stats,
            left_rows: &result.left_rows,
            right_rows: &result.right_rows,
        }
    }
}

/// Write the report as pretty JSON
pub fn write_report(path: &Path, report: &Report<'_>) -> Result<(), ExportError> {
    let content = serde_json::to_string_pretty(report)?;
    fs::write(path, content)?;
    tracing::info!("Saved comparison report to {:?}", path);
    Ok(())
}

/// Unified-style text: ` ` equal, `-` removed, `+` added, modified as `-`/`+`
pub fn to_plain_text(result: &CompareResult) -> String {
    let mut out = String::new();

    for (left, right) in result.left_rows.iter().zip(&result.right_rows) {
        match (left.style, right.style) {
            (StyleClass::Equal, _) => push_line(&mut out, ' ', &left.content),
            (StyleClass::Removed, _) => push_line(&mut out, '-', &left.content),
            (_, StyleClass::Added) => push_line(&mut out, '+', &right.content),
            (StyleClass::Modified, _) => {
                push_line(&mut out, '-', &left.content);
                push_line(&mut out, '+', &right.content);
            }
            _ => {}
        }
    }

    out.push_str(&summary(&result.stats));
    out.push('\n');
    out
}

/// One-line summary of the counters
pub fn summary(stats: &DiffStats) -> String {
    format!(
        "{} added, {} removed, {} modified",
        stats.added, stats.removed, stats.modified
    )
}

fn push_line(out: &mut String, marker: char, content: &str) {
    out.push(marker);
    out.push(' ');
    out.push_str(content);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compare;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn setup_test_dir() -> PathBuf {
        let test_dir = std::env::temp_dir().join(format!("test_export_{}", Uuid::new_v4()));
        fs::create_dir_all(&test_dir).unwrap();
        test_dir
    }

    fn cleanup_test_dir(test_dir: &Path) {
        let _ = fs::remove_dir_all(test_dir);
    }

    #[test]
    fn plain_text_marks_every_row() {
        let result = compare("a\nb\nc\nfoo_bar", "a\nx\nc\nfoo_baz").unwrap();
        let text = to_plain_text(&result);
        assert_eq!(
            text,
            "  a\n- b\n+ x\n  c\n- foo_bar\n+ foo_baz\n1 added, 1 removed, 1 modified\n"
        );
    }

    #[test]
    fn test_report_round_trip_on_disk() {
        let test_dir = setup_test_dir();
        let path = test_dir.join("report.json");

        let options = CompareOptions::default();
        let result = compare("fn a() {}\n", "fn a() {}\nfn b() {}\n").unwrap();
        write_report(&path, &Report::new(&result, &options)).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["stats"]["added"], 1);
        assert_eq!(saved["options"]["strategy"], "adjacent");
        assert_eq!(saved["left_rows"][1]["style"], "added_placeholder");
        assert!(saved["left_rows"][1]["line_number"].is_null());
        assert_eq!(saved["right_rows"][1]["content"], "fn b() {}");
        assert!(saved["generated_at"].is_string());

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn write_into_missing_dir_fails() {
        let test_dir = setup_test_dir();
        let path = test_dir.join("missing").join("report.json");

        let options = CompareOptions::default();
        let result = compare("a", "b").unwrap();
        let err = write_report(&path, &Report::new(&result, &options)).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));

        cleanup_test_dir(&test_dir);
    }
}

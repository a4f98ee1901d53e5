//! Character-level diff used to highlight the edits inside a modified line.
//!
//! The line pipeline never depends on this; it runs once over a finished
//! result so drawing modified rows stays cheap.

use super::{CompareResult, Side, StyleClass};
use similar::{Algorithm, ChangeTag, TextDiff};
use std::time::Duration;

const CHAR_DIFF_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharOp {
    Equal,
    Insert,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharChange {
    pub op: CharOp,
    pub text: String,
}

/// Anything that can produce a character edit script between two strings.
///
/// Applying every `Equal` and `Delete` fragment in order yields `a`; every
/// `Equal` and `Insert` fragment yields `b`. Minimality is not promised.
pub trait CharDiffer {
    fn diff_chars(&self, a: &str, b: &str) -> Vec<CharChange>;
}

/// Myers diff from `similar`, with a deadline so pathological lines stay cheap
pub struct SimilarCharDiffer {
    timeout: Duration,
}

impl SimilarCharDiffer {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SimilarCharDiffer {
    fn default() -> Self {
        Self::new(CHAR_DIFF_TIMEOUT)
    }
}

impl CharDiffer for SimilarCharDiffer {
    fn diff_chars(&self, a: &str, b: &str) -> Vec<CharChange> {
        let diff = TextDiff::configure()
            .algorithm(Algorithm::Myers)
            .timeout(self.timeout)
            .diff_chars(a, b);

        let mut changes: Vec<CharChange> = Vec::new();
        for change in diff.iter_all_changes() {
            let op = match change.tag() {
                ChangeTag::Equal => CharOp::Equal,
                ChangeTag::Insert => CharOp::Insert,
                ChangeTag::Delete => CharOp::Delete,
            };

            // similar yields one change per char, merge runs into fragments
            match changes.last_mut() {
                Some(last) if last.op == op => last.text.push_str(change.value()),
                _ => changes.push(CharChange {
                    op,
                    text: change.value().to_string(),
                }),
            }
        }

        changes
    }
}

/// Character diff with the default differ
pub fn diff_chars(a: &str, b: &str) -> Vec<CharChange> {
    SimilarCharDiffer::default().diff_chars(a, b)
}

/// Character changes for each modified row pair of `result`, indexed by row.
/// Rows that are not modified get `None`.
pub fn modified_row_changes(
    result: &CompareResult,
    differ: &dyn CharDiffer,
) -> Vec<Option<Vec<CharChange>>> {
    result
        .left_rows
        .iter()
        .zip(&result.right_rows)
        .map(|(left, right)| {
            (left.style == StyleClass::Modified)
                .then(|| differ.diff_chars(&left.content, &right.content))
        })
        .collect()
}

/// The fragments visible on one side, flagged `true` when they were edited
pub fn side_fragments(changes: &[CharChange], side: Side) -> Vec<(&str, bool)> {
    changes
        .iter()
        .filter_map(|change| match (change.op, side) {
            (CharOp::Equal, _) => Some((change.text.as_str(), false)),
            (CharOp::Delete, Side::Original) | (CharOp::Insert, Side::Modified) => {
                Some((change.text.as_str(), true))
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rebuild(changes: &[CharChange], side: Side) -> String {
        side_fragments(changes, side)
            .into_iter()
            .map(|(text, _)| text)
            .collect()
    }

    #[test]
    fn fragments_rebuild_both_sides() {
        let a = "let total = price * qty;";
        let b = "let total = price * quantity + tax;";
        let changes = diff_chars(a, b);
        assert_eq!(rebuild(&changes, Side::Original), a);
        assert_eq!(rebuild(&changes, Side::Modified), b);
    }

    #[test]
    fn runs_are_merged() {
        let changes = diff_chars("hello cat", "hello dog");
        // no two neighbours share an op
        for pair in changes.windows(2) {
            assert_ne!(pair[0].op, pair[1].op);
        }
        assert_eq!(changes[0].op, CharOp::Equal);
        assert_eq!(changes[0].text, "hello ");

        let removed: usize = changes
            .iter()
            .filter(|c| c.op == CharOp::Delete)
            .map(|c| c.text.chars().count())
            .sum();
        let inserted: usize = changes
            .iter()
            .filter(|c| c.op == CharOp::Insert)
            .map(|c| c.text.chars().count())
            .sum();
        assert_eq!(removed, 3);
        assert_eq!(inserted, 3);
    }

    #[test]
    fn cjk_insert_is_one_char() {
        let changes = diff_chars("我爱你", "我不爱你");
        let inserted: Vec<&str> = changes
            .iter()
            .filter(|c| c.op == CharOp::Insert)
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(inserted, vec!["不"]);
        assert!(changes.iter().all(|c| c.op != CharOp::Delete));
    }

    #[test]
    fn only_modified_rows_get_changes() {
        let result = crate::diff::compare("a\nfoo_bar\nb\nc", "a\nfoo_baz\nb\nx").unwrap();
        let changes = modified_row_changes(&result, &SimilarCharDiffer::default());
        assert_eq!(changes.len(), result.left_rows.len());

        for (index, row_changes) in changes.iter().enumerate() {
            let left = &result.left_rows[index];
            match row_changes {
                Some(c) => {
                    assert_eq!(left.style, StyleClass::Modified);
                    assert_eq!(rebuild(c, Side::Original), left.content);
                    assert_eq!(rebuild(c, Side::Modified), result.right_rows[index].content);
                }
                None => assert_ne!(left.style, StyleClass::Modified),
            }
        }
        assert_eq!(changes.iter().flatten().count(), 1);
    }

    #[test]
    fn highlight_flags_follow_side() {
        let changes = vec![
            CharChange {
                op: CharOp::Equal,
                text: "foo_ba".to_string(),
            },
            CharChange {
                op: CharOp::Delete,
                text: "r".to_string(),
            },
            CharChange {
                op: CharOp::Insert,
                text: "z".to_string(),
            },
        ];
        assert_eq!(
            side_fragments(&changes, Side::Original),
            vec![("foo_ba", false), ("r", true)]
        );
        assert_eq!(
            side_fragments(&changes, Side::Modified),
            vec![("foo_ba", false), ("z", true)]
        );
    }
}

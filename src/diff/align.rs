//! Line alignment by longest common subsequence.
//!
//! The DP table is `(|original| + 1) x (|modified| + 1)`; backtracking runs
//! from the bottom-right corner and prefers an insertion when the left and
//! upper cells tie. That tie-break decides whether a changed line surfaces as
//! `Removed, Added` (pairable into a modified line) or the other way round,
//! so it must stay as is for stable output.

use super::error::CompareError;
use serde::Serialize;

/// One step of the edit script. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditOp {
    Equal {
        original_line: usize,
        modified_line: usize,
        content: String,
    },
    Added {
        modified_line: usize,
        content: String,
    },
    Removed {
        original_line: usize,
        content: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Equal,
    Added,
    Removed,
}

impl EditOp {
    pub fn kind(&self) -> EditKind {
        match self {
            EditOp::Equal { .. } => EditKind::Equal,
            EditOp::Added { .. } => EditKind::Added,
            EditOp::Removed { .. } => EditKind::Removed,
        }
    }

    pub fn original_line(&self) -> Option<usize> {
        match self {
            EditOp::Equal { original_line, .. } | EditOp::Removed { original_line, .. } => {
                Some(*original_line)
            }
            EditOp::Added { .. } => None,
        }
    }

    pub fn modified_line(&self) -> Option<usize> {
        match self {
            EditOp::Equal { modified_line, .. } | EditOp::Added { modified_line, .. } => {
                Some(*modified_line)
            }
            EditOp::Removed { .. } => None,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            EditOp::Equal { content, .. }
            | EditOp::Added { content, .. }
            | EditOp::Removed { content, .. } => content.as_str(),
        }
    }
}

/// Split text into lines on `'\n'`.
///
/// Empty text has no lines. A trailing newline yields a final empty line. Any
/// `'\r'` is kept, so CRLF and LF texts differ unless the caller folds them.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').collect()
}

/// Drop the trailing `'\r'` CRLF endings leave on each line
pub fn strip_carriage_returns(lines: Vec<&str>) -> Vec<&str> {
    lines
        .into_iter()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Number of lines `split_lines` would produce
pub fn line_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}

/// `cell(i, j)` is the LCS length of `original[..i]` and `modified[..j]`
struct LcsTable {
    width: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn build(original: &[&str], modified: &[&str]) -> Self {
        let width = modified.len() + 1;
        let mut cells = vec![0u32; (original.len() + 1) * width];

        for i in 1..=original.len() {
            for j in 1..=modified.len() {
                cells[i * width + j] = if original[i - 1] == modified[j - 1] {
                    cells[(i - 1) * width + j - 1] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + j - 1])
                };
            }
        }

        Self { width, cells }
    }

    fn cell(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}

/// Compute the minimal edit script turning `original` into `modified`
pub fn align(original: &[&str], modified: &[&str]) -> Result<Vec<EditOp>, CompareError> {
    let table = LcsTable::build(original, modified);
    let mut ops = Vec::with_capacity(original.len() + modified.len());

    let mut i = original.len();
    let mut j = modified.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && original[i - 1] == modified[j - 1] {
            ops.push(EditOp::Equal {
                original_line: i,
                modified_line: j,
                content: original[i - 1].to_string(),
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.cell(i, j - 1) >= table.cell(i - 1, j)) {
            ops.push(EditOp::Added {
                modified_line: j,
                content: modified[j - 1].to_string(),
            });
            j -= 1;
        } else if i > 0 && (j == 0 || table.cell(i, j - 1) < table.cell(i - 1, j)) {
            ops.push(EditOp::Removed {
                original_line: i,
                content: original[i - 1].to_string(),
            });
            i -= 1;
        } else {
            tracing::error!("LCS backtrack made no progress at ({}, {})", i, j);
            return Err(CompareError::InternalInconsistency {
                original_index: i,
                modified_index: j,
            });
        }
    }

    // Built back to front
    ops.reverse();
    Ok(ops)
}

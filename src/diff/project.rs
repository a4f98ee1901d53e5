//! Project classified ops onto two aligned columns.

use super::classify::ClassifiedOp;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleClass {
    Equal,
    Added,
    Removed,
    Modified,
    /// Blank left cell facing an added line
    AddedPlaceholder,
    /// Blank right cell facing a removed line
    RemovedPlaceholder,
}

impl StyleClass {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, StyleClass::AddedPlaceholder | StyleClass::RemovedPlaceholder)
    }
}

/// One cell of a column. Placeholders have no line number and empty content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderRow {
    pub line_number: Option<usize>,
    pub content: String,
    pub style: StyleClass,
}

impl RenderRow {
    fn line(line_number: usize, content: String, style: StyleClass) -> Self {
        Self {
            line_number: Some(line_number),
            content,
            style,
        }
    }

    fn placeholder(style: StyleClass) -> Self {
        Self {
            line_number: None,
            content: String::new(),
            style,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffStats {
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.modified == 0
    }
}

/// Left rows, right rows (always the same length) and change counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub left_rows: Vec<RenderRow>,
    pub right_rows: Vec<RenderRow>,
    pub stats: DiffStats,
}

pub fn project(ops: Vec<ClassifiedOp>) -> Projection {
    let mut left_rows = Vec::with_capacity(ops.len());
    let mut right_rows = Vec::with_capacity(ops.len());
    let mut stats = DiffStats::default();

    // Counters only move when a real line lands on their side
    let mut left_line = 1usize;
    let mut right_line = 1usize;

    for op in ops {
        match op {
            ClassifiedOp::Equal { content, .. } => {
                left_rows.push(RenderRow::line(left_line, content.clone(), StyleClass::Equal));
                right_rows.push(RenderRow::line(right_line, content, StyleClass::Equal));
                left_line += 1;
                right_line += 1;
            }
            ClassifiedOp::Modified {
                removed_content,
                added_content,
                ..
            } => {
                left_rows.push(RenderRow::line(
                    left_line,
                    removed_content,
                    StyleClass::Modified,
                ));
                right_rows.push(RenderRow::line(
                    right_line,
                    added_content,
                    StyleClass::Modified,
                ));
                left_line += 1;
                right_line += 1;
                stats.modified += 1;
            }
            ClassifiedOp::Removed { content, .. } => {
                left_rows.push(RenderRow::line(left_line, content, StyleClass::Removed));
                right_rows.push(RenderRow::placeholder(StyleClass::RemovedPlaceholder));
                left_line += 1;
                stats.removed += 1;
            }
            ClassifiedOp::Added { content, .. } => {
                left_rows.push(RenderRow::placeholder(StyleClass::AddedPlaceholder));
                right_rows.push(RenderRow::line(right_line, content, StyleClass::Added));
                right_line += 1;
                stats.added += 1;
            }
        }
    }

    Projection {
        left_rows,
        right_rows,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_keep_columns_aligned() {
        let ops = vec![
            ClassifiedOp::Equal {
                original_line: 1,
                modified_line: 1,
                content: "a".to_string(),
            },
            ClassifiedOp::Removed {
                original_line: 2,
                content: "b".to_string(),
            },
            ClassifiedOp::Added {
                modified_line: 2,
                content: "x".to_string(),
            },
            ClassifiedOp::Equal {
                original_line: 3,
                modified_line: 3,
                content: "c".to_string(),
            },
        ];
        let projection = project(ops);

        assert_eq!(projection.left_rows.len(), 4);
        assert_eq!(projection.right_rows.len(), 4);

        let left_numbers: Vec<Option<usize>> =
            projection.left_rows.iter().map(|r| r.line_number).collect();
        let right_numbers: Vec<Option<usize>> =
            projection.right_rows.iter().map(|r| r.line_number).collect();
        assert_eq!(left_numbers, vec![Some(1), Some(2), None, Some(3)]);
        assert_eq!(right_numbers, vec![Some(1), None, Some(2), Some(3)]);

        assert_eq!(projection.right_rows[1].style, StyleClass::RemovedPlaceholder);
        assert_eq!(projection.left_rows[2].style, StyleClass::AddedPlaceholder);
        assert!(projection.left_rows[2].content.is_empty());

        assert_eq!(
            projection.stats,
            DiffStats {
                added: 1,
                removed: 1,
                modified: 0
            }
        );
    }

    #[test]
    fn modified_rows_use_both_counters() {
        let ops = vec![
            ClassifiedOp::Added {
                modified_line: 1,
                content: "new first".to_string(),
            },
            ClassifiedOp::Modified {
                original_line: 1,
                modified_line: 2,
                removed_content: "let x = 1;".to_string(),
                added_content: "let x = 2;".to_string(),
            },
        ];
        let projection = project(ops);

        assert_eq!(projection.left_rows[1].line_number, Some(1));
        assert_eq!(projection.right_rows[1].line_number, Some(2));
        assert_eq!(projection.left_rows[1].content, "let x = 1;");
        assert_eq!(projection.right_rows[1].content, "let x = 2;");
        assert_eq!(projection.left_rows[1].style, StyleClass::Modified);
        assert_eq!(projection.stats.modified, 1);
        assert_eq!(projection.stats.added, 1);
    }

    #[test]
    fn nothing_in_nothing_out() {
        let projection = project(Vec::new());
        assert!(projection.left_rows.is_empty());
        assert!(projection.right_rows.is_empty());
        assert!(projection.stats.is_unchanged());
    }
}

//! Turn a raw edit script into equal / added / removed / modified entries.

use super::align::EditOp;
use super::similarity::is_similar;
use serde::{Deserialize, Serialize};

/// How removed and added lines are paired into modified lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingStrategy {
    /// One pass: a removed line directly followed by an added line becomes a
    /// modified line when the two are similar enough.
    #[default]
    Adjacent,
    /// Each block of changes is split into its removed and added lines, which
    /// are paired by position regardless of similarity.
    Grouped,
}

impl PairingStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            PairingStrategy::Adjacent => "Adjacent (similarity gated)",
            PairingStrategy::Grouped => "Grouped (by position)",
        }
    }
}

/// An edit op after pairing. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifiedOp {
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
    Modified {
        original_line: usize,
        modified_line: usize,
        removed_content: String,
        added_content: String,
    },
}

impl From<EditOp> for ClassifiedOp {
    fn from(op: EditOp) -> Self {
        match op {
            EditOp::Equal {
                original_line,
                modified_line,
                content,
            } => ClassifiedOp::Equal {
                original_line,
                modified_line,
                content,
            },
            EditOp::Added {
                modified_line,
                content,
            } => ClassifiedOp::Added {
                modified_line,
                content,
            },
            EditOp::Removed {
                original_line,
                content,
            } => ClassifiedOp::Removed {
                original_line,
                content,
            },
        }
    }
}

/// Classify an edit script with the given strategy.
///
/// `threshold` only applies to [`PairingStrategy::Adjacent`].
pub fn classify(ops: Vec<EditOp>, strategy: PairingStrategy, threshold: f64) -> Vec<ClassifiedOp> {
    match strategy {
        PairingStrategy::Adjacent => classify_adjacent(ops, threshold),
        PairingStrategy::Grouped => classify_grouped(ops),
    }
}

fn classify_adjacent(ops: Vec<EditOp>, threshold: f64) -> Vec<ClassifiedOp> {
    let mut classified = Vec::with_capacity(ops.len());
    let mut iter = ops.into_iter().peekable();

    while let Some(op) = iter.next() {
        if let EditOp::Removed {
            original_line,
            content,
        } = &op
            && let Some(EditOp::Added {
                content: next_content,
                ..
            }) = iter.peek()
            && is_similar(content, next_content, threshold)
            && let Some(EditOp::Added {
                modified_line,
                content: added_content,
            }) = iter.next()
        {
            classified.push(ClassifiedOp::Modified {
                original_line: *original_line,
                modified_line,
                removed_content: content.clone(),
                added_content,
            });
            continue;
        }
        // Anything unpaired stands alone; a skipped Added gets its own turn
        classified.push(op.into());
    }

    classified
}

fn classify_grouped(ops: Vec<EditOp>) -> Vec<ClassifiedOp> {
    let mut classified = Vec::with_capacity(ops.len());
    let mut group = ChangeGroup::default();

    for op in ops {
        match op {
            EditOp::Equal { .. } => {
                group.flush_into(&mut classified);
                classified.push(op.into());
            }
            EditOp::Removed {
                original_line,
                content,
            } => group.removed.push((original_line, content)),
            EditOp::Added {
                modified_line,
                content,
            } => group.added.push((modified_line, content)),
        }
    }
    group.flush_into(&mut classified);

    classified
}

/// A contiguous block of non-equal lines, as (line number, content)
#[derive(Default)]
struct ChangeGroup {
    removed: Vec<(usize, String)>,
    added: Vec<(usize, String)>,
}

impl ChangeGroup {
    /// Pair index by index; leftovers stand alone
    fn flush_into(&mut self, out: &mut Vec<ClassifiedOp>) {
        let mut removed = self.removed.drain(..);
        let mut added = self.added.drain(..);

        loop {
            match (removed.next(), added.next()) {
                (Some((original_line, removed_content)), Some((modified_line, added_content))) => {
                    out.push(ClassifiedOp::Modified {
                        original_line,
                        modified_line,
                        removed_content,
                        added_content,
                    })
                }
                (Some((original_line, content)), None) => out.push(ClassifiedOp::Removed {
                    original_line,
                    content,
                }),
                (None, Some((modified_line, content))) => out.push(ClassifiedOp::Added {
                    modified_line,
                    content,
                }),
                (None, None) => break,
            }
        }
    }
}

//! Line comparison pipeline.
//!
//! Text is split into lines, aligned by LCS, paired into modified lines and
//! projected onto two columns of equal length:
//!
//! ```text
//! text -> lines -> edit script -> classified ops -> left/right rows + stats
//! ```
//!
//! Every call is independent; nothing is cached between comparisons.

pub mod align;
pub mod classify;
mod error;
pub mod inline;
pub mod project;
pub mod similarity;

pub use align::{EditKind, EditOp, line_count, split_lines, strip_carriage_returns};
pub use classify::{ClassifiedOp, PairingStrategy};
pub use error::CompareError;
pub use project::{DiffStats, RenderRow, StyleClass};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default per-side line cap
pub const DEFAULT_MAX_LINES: usize = 50_000;

/// Default cap on LCS table cells, about 200 MB of `u32`
pub const DEFAULT_MAX_TABLE_CELLS: usize = 50_000_000;

/// Which input something refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Original,
    Modified,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Original => f.write_str("original"),
            Side::Modified => f.write_str("modified"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompareOptions {
    /// Minimum similarity for an adjacent removed/added pair to become modified
    #[serde(default = "default_threshold")]
    pub similarity_threshold: f64,

    #[serde(default)]
    pub strategy: PairingStrategy,

    /// Inputs longer than this are rejected before any table is allocated
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Cap on `(original lines + 1) * (modified lines + 1)`
    #[serde(default = "default_max_table_cells")]
    pub max_table_cells: usize,

    /// Compare CRLF and LF lines as equal by dropping a trailing `'\r'`
    #[serde(default)]
    pub ignore_line_endings: bool,
}

fn default_threshold() -> f64 {
    similarity::DEFAULT_SIMILARITY_THRESHOLD
}

fn default_max_lines() -> usize {
    DEFAULT_MAX_LINES
}

fn default_max_table_cells() -> usize {
    DEFAULT_MAX_TABLE_CELLS
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: default_threshold(),
            strategy: PairingStrategy::default(),
            max_lines: default_max_lines(),
            max_table_cells: default_max_table_cells(),
            ignore_line_endings: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompareResult {
    pub left_rows: Vec<RenderRow>,
    pub right_rows: Vec<RenderRow>,
    pub stats: DiffStats,
}

/// Compare two texts with default options
pub fn compare(original: &str, modified: &str) -> Result<CompareResult, CompareError> {
    compare_with(original, modified, &CompareOptions::default())
}

/// Compare two texts line by line
pub fn compare_with(
    original: &str,
    modified: &str,
    options: &CompareOptions,
) -> Result<CompareResult, CompareError> {
    if original.trim().is_empty() && modified.trim().is_empty() {
        return Err(CompareError::InvalidInput);
    }

    let threshold = options.similarity_threshold;
    if !(0.0..=1.0).contains(&threshold) {
        return Err(CompareError::InvalidThreshold(threshold));
    }

    let mut original_lines = split_lines(original);
    let mut modified_lines = split_lines(modified);
    if options.ignore_line_endings {
        original_lines = strip_carriage_returns(original_lines);
        modified_lines = strip_carriage_returns(modified_lines);
    }

    for (side, lines) in [
        (Side::Original, original_lines.len()),
        (Side::Modified, modified_lines.len()),
    ] {
        if lines > options.max_lines {
            tracing::warn!("Refusing to compare {} text of {} lines", side, lines);
            return Err(CompareError::SizeLimitExceeded {
                side,
                lines,
                limit: options.max_lines,
            });
        }
    }

    let cells = (original_lines.len() + 1)
        .checked_mul(modified_lines.len() + 1)
        .unwrap_or(usize::MAX);
    if cells > options.max_table_cells {
        tracing::warn!("Refusing to build an LCS table of {} cells", cells);
        return Err(CompareError::TableLimitExceeded {
            cells,
            limit: options.max_table_cells,
        });
    }

    tracing::debug!(
        "Comparing {} original lines against {} modified lines ({:?})",
        original_lines.len(),
        modified_lines.len(),
        options.strategy
    );

    let ops = align::align(&original_lines, &modified_lines)?;
    let classified = classify::classify(ops, options.strategy, threshold);
    let projection = project::project(classified);

    tracing::debug!("Comparison done: {:?}", projection.stats);

    Ok(CompareResult {
        left_rows: projection.left_rows,
        right_rows: projection.right_rows,
        stats: projection.stats,
    })
}

use super::Side;
use thiserror::Error;

/// Errors produced by the comparison pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompareError {
    #[error("Please enter at least one code block to compare.")]
    InvalidInput,

    #[error("Similarity threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f64),

    #[error("The {side} text has {lines} lines, the limit is {limit}")]
    SizeLimitExceeded {
        side: Side,
        lines: usize,
        limit: usize,
    },

    #[error("Aligning these texts needs {cells} table cells, the limit is {limit}")]
    TableLimitExceeded { cells: usize, limit: usize },

    #[error(
        "Alignment stalled at original line {original_index}, modified line {modified_index}"
    )]
    InternalInconsistency {
        original_index: usize,
        modified_index: usize,
    },
}

//! Error types for the matrix toolkit

use thiserror::Error;

use crate::transform::Block;

/// Which operand of a 2D multiply was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Left => write!(f, "left"),
            Operand::Right => write!(f, "right"),
        }
    }
}

/// Matrix toolkit errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// A 2D operand is not a non-empty rectangular array
    #[error("{operand} operand should be a non-empty 2-dimensional array: {reason}")]
    InvalidShape { operand: Operand, reason: String },

    /// Inner dimensions of a 2D multiply disagree
    #[error(
        "number of columns in the first matrix ({columns}) should be the same as the number of rows in the second ({rows})"
    )]
    DimensionMismatch { columns: usize, rows: usize },

    /// A flat buffer handed to `Matrix4` was not 16 long
    #[error("a 4x4 matrix needs 16 values, got {0}")]
    InvalidLength(usize),

    /// The transform builder wrote two overlapping sub-blocks
    #[error("{second:?} overwrites entries already set by {first:?}")]
    BlockConflict { first: Block, second: Block },

    /// `matrix3d(...)` text could not be parsed
    #[error("Failed to parse matrix3d: {0}")]
    Parse(String),
}

/// Result type for matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;

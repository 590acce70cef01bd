use thiserror::Error;

use crate::maze::CellId;

/// Errors surfaced by grid construction, markup accessors, and generator
/// parameter validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MazeError {
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
    #[error("coordinates ({row}, {column}) are outside a {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    #[error("cells {0:?} and {1:?} are not linked")]
    NotLinked(CellId, CellId),
    #[error("sidewinder odds must be in [0.0, 1.0), got {0}")]
    InvalidOdds(f64),
    #[error("hybrid threshold must be in [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),
    #[error("markup has no marked cells")]
    EmptyMarkup,
    #[error("cannot colorize a markup whose maximum value is 0")]
    ZeroIntensityRange,
}

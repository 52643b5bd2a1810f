//! Error type shared by the storage model, the engines and the drivers.

use crate::matrix::Layout;

/// Errors produced while building matrices or validating engine operands.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Matrix dimension must be at least 1.
    #[error("invalid dimension {0}: must be a positive integer")]
    InvalidDimension(usize),

    /// Block size must be at least 1.
    #[error("invalid block size {0}: must be a positive integer")]
    InvalidBlockSize(usize),

    /// Two operands of one call disagree on `n`.
    #[error("{operand}: expected {expected}x{expected} matrix, got {found}x{found}")]
    DimensionMismatch {
        operand: &'static str,
        expected: usize,
        found: usize,
    },

    /// An operand is stored in the wrong layout for the chosen variant.
    #[error("{operand}: expected {expected} layout, got {found}")]
    LayoutMismatch {
        operand: &'static str,
        expected: Layout,
        found: Layout,
    },

    /// Buffer length does not equal `n * n`.
    #[error("buffer holds {found} values, {n}x{n} matrix needs {expected}")]
    BufferLength {
        n: usize,
        expected: usize,
        found: usize,
    },

    /// The `n * n` buffer could not be allocated.
    #[error("cannot allocate storage for a {n}x{n} matrix")]
    Allocation { n: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

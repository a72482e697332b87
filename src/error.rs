//! Error types for matrix construction and the direct solvers.
//!
//! Every fallible operation in this crate returns [`MatrixError`] through
//! the crate-level [`Result`] alias. Errors are raised at the point of
//! detection and propagate to the caller; there is no internal recovery.

use thiserror::Error;

/// Errors that can occur during matrix construction, arithmetic, and
/// LU-based solving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Row data passed to a validated constructor is not rectangular.
    #[error("malformed matrix: row {row} has {got} columns, expected {expected}")]
    Malformed {
        /// Index of the offending row
        row: usize,
        /// Column count established by the first row
        expected: usize,
        /// Column count actually found
        got: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    ///
    /// Raised by elementwise operations on unequal shapes and by matrix
    /// multiplication (or solving) when the inner dimensions disagree.
    #[error("shape mismatch: {left:?} is incompatible with {right:?}")]
    ShapeMismatch {
        /// Shape of the left operand
        left: (usize, usize),
        /// Shape of the right operand
        right: (usize, usize),
    },

    /// A square matrix is required (pivoting, LU, determinant, inverse).
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// An element index lies outside the matrix shape.
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    OutOfBounds {
        /// The requested (row, column) index
        index: (usize, usize),
        /// The matrix shape
        shape: (usize, usize),
    },

    /// A zero pivot was encountered during LU factorization.
    ///
    /// Partial pivoting already selected the largest-magnitude candidate,
    /// so a vanishing pivot means the matrix is singular (or numerically
    /// indistinguishable from singular).
    #[error("matrix is singular: zero pivot in column {column}")]
    Singular {
        /// Column whose pivot vanished
        column: usize,
    },

    /// A random row was requested with more distinct values than the
    /// sampling range contains.
    #[error("cannot sample {requested} distinct values from a range of {population}")]
    SampleTooLarge {
        /// Number of integers in the sampling range
        population: usize,
        /// Number of distinct values requested per row
        requested: usize,
    },
}

/// A specialized `Result` type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

impl MatrixError {
    /// Returns `true` if this is a dimension- or shape-related error.
    ///
    /// This includes `Malformed`, `ShapeMismatch`, `NotSquare`, and
    /// `OutOfBounds` variants.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            MatrixError::Malformed { .. }
                | MatrixError::ShapeMismatch { .. }
                | MatrixError::NotSquare { .. }
                | MatrixError::OutOfBounds { .. }
        )
    }

    /// Returns `true` if the matrix was found to be singular.
    pub fn is_singular(&self) -> bool {
        matches!(self, MatrixError::Singular { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatrixError::Malformed {
            row: 1,
            expected: 2,
            got: 1,
        };
        assert_eq!(
            err.to_string(),
            "malformed matrix: row 1 has 1 columns, expected 2"
        );

        let err = MatrixError::Singular { column: 3 };
        assert_eq!(err.to_string(), "matrix is singular: zero pivot in column 3");
    }

    #[test]
    fn test_is_shape_error() {
        let shape_err = MatrixError::ShapeMismatch {
            left: (2, 2),
            right: (3, 2),
        };
        let singular_err = MatrixError::Singular { column: 0 };

        assert!(shape_err.is_shape_error());
        assert!(!singular_err.is_shape_error());
    }

    #[test]
    fn test_is_singular() {
        let singular_err = MatrixError::Singular { column: 1 };
        let square_err = MatrixError::NotSquare { rows: 2, cols: 3 };

        assert!(singular_err.is_singular());
        assert!(!square_err.is_singular());
    }
}

//! Dense matrix operations with LU-based direct solvers.
//!
//! This crate provides a small dense-matrix toolkit built around Gaussian
//! elimination: a rectangular [`Matrix`] container with elementwise and
//! multiplicative arithmetic, LU factorization with partial pivoting, and
//! the solver surface derived from it (linear systems, determinant,
//! inverse).
//!
//! # Features
//!
//! - **Matrix storage**: validated construction from rows, zero/identity
//!   constructors, bounds-checked indexing, `ndarray` interop
//! - **Arithmetic**: add, negate, subtract, scalar multiply (both sides),
//!   matrix multiply, transpose
//! - **LU factorization**: `P·A = L·U` with partial pivoting and swap
//!   parity, reusable across solves
//! - **Solvers**: multi-column right-hand sides, determinant, inverse
//! - **Generic scalar types**: works with `f64`, `f32`, `Complex64`,
//!   `Complex32`
//!
//! # Example
//!
//! ```
//! use math_dense::{det, solve, Matrix};
//!
//! let a = Matrix::<f64>::from_rows(vec![vec![4.0, 3.0], vec![6.0, 3.0]]).expect("rectangular");
//! let b = Matrix::from_rows(vec![vec![10.0], vec![12.0]]).expect("rectangular");
//!
//! let x = solve(&a, &b).expect("system is non-singular");
//! assert!((x.get(0, 0).expect("in bounds") - 1.0).abs() < 1e-12);
//! assert!((x.get(1, 0).expect("in bounds") - 2.0).abs() < 1e-12);
//!
//! let d = det(&a).expect("matrix is square");
//! assert!((d + 6.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod lu;
pub mod matrix;
pub mod pivot;
pub mod random;
pub mod scalar;
pub mod solve;

pub use error::{MatrixError, Result};
pub use lu::{lu, LuDecomposition};
pub use matrix::Matrix;
pub use pivot::pivotize;
pub use random::{random_matrix, random_matrix_with};
pub use scalar::Scalar;
pub use solve::{det, inverse, solve};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}

//! Linear-system solving, determinant, and inversion on top of LU.
//!
//! [`LuDecomposition`] gains its consumer methods here: triangular
//! substitution ([`LuDecomposition::solve`]) and the signed diagonal
//! product ([`LuDecomposition::det`]). The free functions factor and
//! consume in one call, mirroring the cost profile of the operations
//! (one O(n³) factorization, then O(n²) per right-hand-side column).

use ndarray::Array2;

use crate::error::{MatrixError, Result};
use crate::lu::{lu, LuDecomposition};
use crate::matrix::Matrix;
use crate::scalar::Scalar;

impl<T: Scalar> LuDecomposition<T> {
    /// Solves `A·X = B` for `X` using the precomputed factors.
    ///
    /// Each column of `B` is solved independently: forward substitution
    /// through `L` (unit diagonal, no division), then backward
    /// substitution through `U`. `X` has the same shape as `B`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if `B` has a different row
    /// count than the factored matrix.
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>> {
        let n = self.l.nrows();
        if b.nrows() != n {
            return Err(MatrixError::ShapeMismatch {
                left: (n, n),
                right: b.shape(),
            });
        }

        let pb = self.p.matmul(b)?;
        let rhs = pb.as_array();
        let l = self.l.as_array();
        let u = self.u.as_array();

        let cols = b.ncols();
        let mut y = Array2::<T>::zeros((n, cols));
        let mut x = Array2::<T>::zeros((n, cols));

        for c in 0..cols {
            // L·y = P·b, top down
            for j in 0..n {
                let mut v = rhs[[j, c]];
                for k in 0..j {
                    v -= l[[j, k]] * y[[k, c]];
                }
                y[[j, c]] = v;
            }

            // U·x = y, bottom up
            for j in (0..n).rev() {
                let mut v = y[[j, c]];
                for k in (j + 1)..n {
                    v -= u[[j, k]] * x[[k, c]];
                }
                x[[j, c]] = v * u[[j, j]].inv();
            }
        }

        Ok(Matrix::from_array(x))
    }

    /// Determinant of the factored matrix.
    ///
    /// Computed as `(-1)^swaps · Π L[i][i] · Π U[i][i]`. The product over
    /// `L`'s diagonal is currently always one, but the general form is
    /// kept so the result stays correct if the unit-diagonal convention
    /// is ever relaxed.
    pub fn det(&self) -> T {
        let n = self.l.nrows();
        let l = self.l.as_array();
        let u = self.u.as_array();

        let mut l_prod = T::one();
        let mut u_prod = T::one();
        for i in 0..n {
            l_prod *= l[[i, i]];
            u_prod *= u[[i, i]];
        }

        let d = l_prod * u_prod;
        if self.swaps % 2 == 1 {
            -d
        } else {
            d
        }
    }
}

/// Solves the linear system `A·X = B`.
///
/// `B` may have any number of columns; each is solved independently, so a
/// multi-column `B` solves for several right-hand sides at once.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] if `A` is not square,
/// [`MatrixError::Singular`] if `A` has no unique solution, and
/// [`MatrixError::ShapeMismatch`] if `B`'s row count differs from `A`'s.
pub fn solve<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    lu(a)?.solve(b)
}

/// Determinant of a square matrix, via LU factorization.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] for non-square input and
/// [`MatrixError::Singular`] when a pivot vanishes (the determinant of
/// such a matrix is zero, but the factorization it would be read from
/// does not exist).
pub fn det<T: Scalar>(a: &Matrix<T>) -> Result<T> {
    Ok(lu(a)?.det())
}

/// Inverse of a square matrix, computed by solving `A·X = I`.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] for non-square input and
/// [`MatrixError::Singular`] if no inverse exists.
pub fn inverse<T: Scalar>(a: &Matrix<T>) -> Result<Matrix<T>> {
    if !a.is_square() {
        return Err(MatrixError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    solve(a, &Matrix::identity(a.nrows()))
}

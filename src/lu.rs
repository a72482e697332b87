//! LU factorization with partial pivoting.
//!
//! Factors a square matrix `A` into `P·A = L·U` with `L` unit lower
//! triangular, `U` upper triangular, and `P` the row permutation from
//! [`pivotize`]. The factorization is returned as a reusable
//! [`LuDecomposition`] value; solving and the determinant are methods on
//! it (see the [`solve`](crate::solve) module for the one-shot free
//! functions).

use ndarray::Array2;
use num_traits::FromPrimitive;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::pivot::pivotize;
use crate::scalar::Scalar;

/// Result of [`lu`]: the factors of `P·A = L·U`.
///
/// The three matrices are independent values with no back-reference to
/// the input. `swaps` is the number of row swaps performed by pivoting;
/// its parity gives the determinant sign.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: Scalar> {
    /// Lower-triangular factor with unit diagonal
    pub l: Matrix<T>,
    /// Upper-triangular factor
    pub u: Matrix<T>,
    /// Row permutation matrix
    pub p: Matrix<T>,
    /// Number of row swaps performed during pivoting
    pub swaps: usize,
}

/// Factors a square matrix into `P·A = L·U`.
///
/// Uses Doolittle's method on the row-permuted matrix `P·A`. The factors
/// are filled column by column; the order matters because each column's
/// partial sums depend on every earlier column.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] for non-square input and
/// [`MatrixError::Singular`] if a pivot vanishes. Partial pivoting has
/// already selected the largest candidate at that point, so no further
/// elimination is possible.
pub fn lu<T: Scalar>(a: &Matrix<T>) -> Result<LuDecomposition<T>> {
    let (p, swaps) = pivotize(a)?;
    let pa = p.matmul(a)?;

    let n = a.nrows();
    let a2 = pa.as_array();
    let mut l = Array2::<T>::zeros((n, n));
    let mut u = Array2::<T>::zeros((n, n));

    for j in 0..n {
        l[[j, j]] = T::one();

        for i in 0..=j {
            let mut sum = T::zero();
            for k in 0..i {
                sum += u[[k, j]] * l[[i, k]];
            }
            u[[i, j]] = a2[[i, j]] - sum;
        }

        let pivot = u[[j, j]];
        if pivot.norm() < T::Real::from_f64(1e-30).unwrap() {
            return Err(MatrixError::Singular { column: j });
        }

        for i in j..n {
            let mut sum = T::zero();
            for k in 0..j {
                sum += u[[k, j]] * l[[i, k]];
            }
            l[[i, j]] = (a2[[i, j]] - sum) * pivot.inv();
        }
    }

    log::debug!("LU factorization: {}x{} with {} row swaps", n, n, swaps);

    Ok(LuDecomposition {
        l: Matrix::from_array(l),
        u: Matrix::from_array(u),
        p,
        swaps,
    })
}

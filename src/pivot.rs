//! Partial-pivoting row permutation.
//!
//! Builds the permutation matrix consumed by the LU factorization. The
//! pivot search reads the input matrix only; the actual row reordering is
//! deferred to the later `P·A` product, which keeps this step independent
//! of the elimination itself.

use ndarray::Array2;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Computes the partial-pivoting permutation for a square matrix.
///
/// Starting from the identity, for each column `j` the row in `[j, n)`
/// with the largest-magnitude entry in that column is swapped into
/// position `j`. Ties keep the lowest row index. Returns the permutation
/// matrix together with the number of swaps performed (the permutation
/// parity, used for the determinant sign).
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] if `a` is not square.
pub fn pivotize<T: Scalar>(a: &Matrix<T>) -> Result<(Matrix<T>, usize)> {
    if !a.is_square() {
        return Err(MatrixError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }

    let n = a.nrows();
    let mat = a.as_array();
    let mut p = Array2::<T>::eye(n);
    let mut swaps = 0;

    for j in 0..n {
        let mut pivot_row = j;
        let mut pivot_mag = mat[[j, j]].norm();
        for i in (j + 1)..n {
            let mag = mat[[i, j]].norm();
            if mag > pivot_mag {
                pivot_row = i;
                pivot_mag = mag;
            }
        }

        if pivot_row != j {
            for k in 0..n {
                let tmp = p[[j, k]];
                p[[j, k]] = p[[pivot_row, k]];
                p[[pivot_row, k]] = tmp;
            }
            swaps += 1;
        }
    }

    Ok((Matrix::from_array(p), swaps))
}

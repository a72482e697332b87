//! Random matrix generation.
//!
//! Fills each row with distinct integers sampled without replacement from
//! a half-open range. Rows are sampled independently, so values may repeat
//! across rows but never within one. Useful for generating test systems
//! whose entries are exact in floating point.

use ndarray::Array2;
use num_traits::FromPrimitive;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Generates a random matrix using the thread-local RNG.
///
/// See [`random_matrix_with`] for the sampling contract and a seedable
/// variant.
///
/// # Errors
///
/// Returns [`MatrixError::SampleTooLarge`] if a row needs more distinct
/// values than `[low, high)` contains.
pub fn random_matrix<T: Scalar>(dims: (usize, usize), range: (i64, i64)) -> Result<Matrix<T>> {
    random_matrix_with(dims, range, &mut rand::thread_rng())
}

/// Generates a `dims.0` by `dims.1` matrix with a caller-supplied RNG.
///
/// Each row is an independent sample of `dims.1` distinct integers drawn
/// without replacement from `[range.0, range.1)`, converted into the
/// scalar type.
///
/// # Errors
///
/// Returns [`MatrixError::SampleTooLarge`] if a row needs more distinct
/// values than the range contains.
pub fn random_matrix_with<T: Scalar, R: Rng + ?Sized>(
    dims: (usize, usize),
    range: (i64, i64),
    rng: &mut R,
) -> Result<Matrix<T>> {
    let (rows, cols) = dims;
    let (low, high) = range;

    let population = high.saturating_sub(low).max(0) as usize;
    if population < cols {
        return Err(MatrixError::SampleTooLarge {
            population,
            requested: cols,
        });
    }

    let pool: Vec<i64> = (low..high).collect();
    let mut data = Array2::<T>::zeros((rows, cols));
    for i in 0..rows {
        for (j, v) in pool.choose_multiple(rng, cols).enumerate() {
            data[[i, j]] = T::from_real(T::Real::from_i64(*v).unwrap());
        }
    }

    Ok(Matrix::from_array(data))
}

//! Dense matrix storage and elementwise/multiplicative operations.
//!
//! [`Matrix`] is a rectangular dense container backed by an
//! [`ndarray::Array2`], generic over the [`Scalar`] element type. It covers
//! construction (validated, unchecked, zero, identity), bounds-checked
//! indexing, elementwise arithmetic, scalar and matrix multiplication,
//! transposition, and fixed-width text formatting.
//!
//! Operations return new matrices; the only in-place mutation in the crate
//! happens on freshly allocated arrays inside the decomposition routines,
//! before they are wrapped into `Matrix` values.

use ndarray::{Array2, ArrayView1};
use num_complex::{Complex32, Complex64};
use std::fmt;
use std::ops::{Mul, Neg};

use crate::error::{MatrixError, Result};
use crate::scalar::Scalar;

/// A dense rectangular matrix over a [`Scalar`] element type.
///
/// Stored row-major in an [`Array2`]. The shape is derived from the
/// backing array and cannot drift out of sync with the data; rectangularity
/// is validated at construction (or guaranteed structurally by the
/// constructor used).
///
/// # Examples
///
/// ```
/// use math_dense::Matrix;
///
/// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("rectangular");
/// assert_eq!(a.shape(), (2, 2));
/// assert_eq!(a.get(1, 0).expect("in bounds"), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Scalar> {
    data: Array2<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Creates a matrix from row data, validating rectangularity.
    ///
    /// Element-type validity is enforced at compile time by the [`Scalar`]
    /// bound, so the only runtime check is that every row has the same
    /// length as the first and that there is at least one element.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Malformed`] if the rows are ragged or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use math_dense::Matrix;
    ///
    /// assert!(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).is_ok());
    /// assert!(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let ncols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => {
                return Err(MatrixError::Malformed {
                    row: 0,
                    expected: 1,
                    got: 0,
                })
            }
        };
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(MatrixError::Malformed {
                    row: i,
                    expected: ncols,
                    got: row.len(),
                });
            }
        }
        Ok(Self::collect_rows(rows.len(), ncols, rows))
    }

    /// Creates a matrix from row data without validating rectangularity.
    ///
    /// Fast path for callers that already guarantee well-formed rows, such
    /// as operations assembling structurally valid results.
    ///
    /// # Panics
    ///
    /// Panics if the rows are in fact ragged.
    pub fn from_rows_unchecked(rows: Vec<Vec<T>>) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        Self::collect_rows(nrows, ncols, rows)
    }

    fn collect_rows(nrows: usize, ncols: usize, rows: Vec<Vec<T>>) -> Self {
        let flat: Vec<T> = rows.into_iter().flatten().collect();
        let data =
            Array2::from_shape_vec((nrows, ncols), flat).expect("row data matches shape");
        Self { data }
    }

    /// Wraps an existing array; rectangularity is structural for `Array2`.
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data }
    }

    /// The backing array, as a read view (not a copy).
    pub fn as_array(&self) -> &Array2<T> {
        &self.data
    }

    /// Copies the elements out into a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect()
    }

    /// Creates a `rows` by `cols` matrix of zeros.
    pub fn zeroes(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Creates the `n` by `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self {
            data: Array2::eye(n),
        }
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.data.nrows(), self.data.ncols())
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// Whether the matrix is square.
    pub fn is_square(&self) -> bool {
        self.data.nrows() == self.data.ncols()
    }

    /// Bounds-checked element access.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if `(i, j)` lies outside the
    /// shape.
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        let (rows, cols) = self.shape();
        if i >= rows || j >= cols {
            return Err(MatrixError::OutOfBounds {
                index: (i, j),
                shape: (rows, cols),
            });
        }
        Ok(self.data[[i, j]])
    }

    /// A read view of row `i`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if `i >= nrows()`.
    pub fn row(&self, i: usize) -> Result<ArrayView1<'_, T>> {
        if i >= self.nrows() {
            return Err(MatrixError::OutOfBounds {
                index: (i, 0),
                shape: self.shape(),
            });
        }
        Ok(self.data.row(i))
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] unless both operands have
    /// identical shape.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Self {
            data: &self.data + &other.data,
        })
    }

    /// Elementwise difference, defined as `self + (-other)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] unless both operands have
    /// identical shape.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&-other)
    }

    /// Elementwise product with a scalar.
    ///
    /// Also available as the `*` operator, on either side of the matrix.
    pub fn scale(&self, k: T) -> Self {
        Self {
            data: self.data.mapv(|v| v * k),
        }
    }

    /// Matrix product.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] unless `self.ncols()`
    /// equals `other.nrows()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use math_dense::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("rectangular");
    /// let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).expect("rectangular");
    /// let c = a.matmul(&b).expect("compatible shapes");
    /// assert_eq!(c.get(0, 0).expect("in bounds"), 19.0);
    /// ```
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.ncols() != other.nrows() {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Self {
            data: self.data.dot(&other.data),
        })
    }

    /// Transposed copy: entry `(i, j)` of the result is entry `(j, i)` of
    /// `self`.
    pub fn transpose(&self) -> Self {
        Self {
            data: self.data.t().to_owned(),
        }
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        Matrix {
            data: self.data.mapv(|v| -v),
        }
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -&self
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, k: T) -> Matrix<T> {
        self.scale(k)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, k: T) -> Matrix<T> {
        self.scale(k)
    }
}

// Left scalar multiplication cannot be written generically (the scalar is
// the receiver), so it is instantiated per supported element type.
macro_rules! impl_left_scalar_mul {
    ($($t:ty),* $(,)?) => {$(
        impl Mul<&Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                rhs.scale(self)
            }
        }

        impl Mul<Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                rhs.scale(self)
            }
        }
    )*};
}

impl_left_scalar_mul!(f32, f64, Complex32, Complex64);

impl<T: Scalar> fmt::Display for Matrix<T> {
    /// Renders each row as `|` followed by one 6-character field per
    /// entry (up to 5 significant characters, centered) and a closing
    /// `|`, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.rows() {
            write!(f, "|")?;
            for entry in row {
                write!(f, "{:^6.5}", entry.to_string())?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_from_rows_shape_and_elements() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
            .expect("rectangular");
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(0, 2).unwrap(), 3.0);
        assert_eq!(m.get(1, 0).unwrap(), 4.0);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Malformed {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        assert!(Matrix::<f64>::from_rows(vec![]).is_err());
        assert!(Matrix::<f64>::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn test_from_array_round_trip() {
        let data = array![[1.0, 2.0], [3.0, 4.0]];
        let m = Matrix::from_array(data.clone());
        assert_eq!(m.as_array(), &data);
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let err = m.get(0, 2).unwrap_err();
        assert_eq!(
            err,
            MatrixError::OutOfBounds {
                index: (0, 2),
                shape: (1, 2)
            }
        );
        assert!(m.get(1, 0).is_err());
    }

    #[test]
    fn test_row_view() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let row = m.row(1).unwrap();
        assert_eq!(row.to_vec(), vec![3.0, 4.0]);
        assert!(m.row(2).is_err());
    }

    #[test]
    fn test_zeroes_and_identity() {
        let z = Matrix::<f64>::zeroes(2, 3);
        assert_eq!(z.shape(), (2, 3));
        assert_eq!(z.get(1, 2).unwrap(), 0.0);

        let id = Matrix::<f64>::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(id.get(i, j).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_add() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![10.0, 20.0], vec![30.0, 40.0]]).unwrap();
        let c = a.add(&b).unwrap();
        assert_eq!(
            c,
            Matrix::from_rows(vec![vec![11.0, 22.0], vec![33.0, 44.0]]).unwrap()
        );
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = Matrix::<f64>::zeroes(2, 2);
        let b = Matrix::<f64>::zeroes(3, 2);
        let err = a.add(&b).unwrap_err();
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_neg_and_sub() {
        let a = Matrix::from_rows(vec![vec![1.0, -2.0], vec![3.0, -4.0]]).unwrap();
        let n = -&a;
        assert_eq!(n.get(0, 1).unwrap(), 2.0);

        let d = a.sub(&a).unwrap();
        assert_eq!(d, Matrix::zeroes(2, 2));
    }

    #[test]
    fn test_scalar_mul_commutes() {
        let a = Matrix::<f64>::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let left = 2.0 * &a;
        let right = &a * 2.0;
        assert_eq!(left, right);
        assert_eq!(left.get(1, 1).unwrap(), 8.0);
        assert_eq!(a.scale(2.0), left);
    }

    #[test]
    fn test_matmul() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(
            c,
            Matrix::from_rows(vec![vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap()
        );
    }

    #[test]
    fn test_matmul_rectangular() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![4.0], vec![5.0], vec![6.0]]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), (1, 1));
        assert_relative_eq!(c.get(0, 0).unwrap(), 32.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matmul_inner_dimension_mismatch() {
        let a = Matrix::<f64>::zeroes(2, 3);
        let b = Matrix::<f64>::zeroes(2, 2);
        let err = a.matmul(&b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch {
                left: (2, 3),
                right: (2, 2)
            }
        );
    }

    #[test]
    fn test_transpose() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(t.get(j, i).unwrap(), a.get(i, j).unwrap());
            }
        }
    }

    #[test]
    fn test_display_fixed_width() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        assert_eq!(m.to_string(), "|  1     2   |\n");

        // Long representations are truncated to 5 significant characters.
        let m = Matrix::from_rows(vec![vec![2.0 / 3.0]]).unwrap();
        assert_eq!(m.to_string(), "|0.666 |\n");
    }

    #[test]
    fn test_equality_includes_shape() {
        assert_ne!(Matrix::<f64>::zeroes(2, 3), Matrix::<f64>::zeroes(3, 2));
        assert_eq!(Matrix::<f64>::zeroes(2, 3), Matrix::<f64>::zeroes(2, 3));
    }
}

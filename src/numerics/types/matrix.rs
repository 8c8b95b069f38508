// src/numerics/types/matrix.rs
// Dense rows x cols matrix with cofactor-based determinant and inverse.

use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use crate::numerics::error::MatrixError;

/// Convenience alias used throughout the matrix engine.
pub type Result<T, E = MatrixError> = std::result::Result<T, E>;

/// A dense matrix stored row-major in a single contiguous buffer.
///
/// The shape is fixed at construction and `data.len() == rows * cols` holds
/// for the whole lifetime of the value. Every derived matrix (product,
/// transpose, submatrix, inverse) owns a fresh buffer.
///
/// Determinant, minor, cofactor and inverse use recursive cofactor expansion
/// along the first row, which is O(n!) in the matrix size. The engine is meant
/// for the 2x2 to 4x4 matrices of affine geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "MatrixData<T>",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct Matrix<T: FloatingPoint = f64> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Unvalidated wire form of a [`Matrix`].
#[derive(Deserialize)]
struct MatrixData<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: FloatingPoint> TryFrom<MatrixData<T>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(raw: MatrixData<T>) -> Result<Self> {
        let mut matrix = Matrix::new(raw.rows, raw.cols)?;
        if raw.data.len() != matrix.data.len() {
            return Err(MatrixError::DimensionMismatch {
                expected: (raw.rows, raw.cols),
                found: (1, raw.data.len()),
            });
        }
        matrix.data = raw.data;
        Ok(matrix)
    }
}

impl<T: FloatingPoint> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a zero-filled `rows x cols` matrix.
    ///
    /// # Errors
    /// * `MatrixError::InvalidDimension` - `rows` or `cols` is zero
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        })
    }

    /// Create a matrix from a grid of rows.
    ///
    /// The shape is taken from the grid: its length and the length of its
    /// first row. Every other row must have the same length.
    ///
    /// # Examples
    /// ```
    /// # use lumen::numerics::types::matrix::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 5.0], [-3.0, 2.0]]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), 17.0);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(grid: &[R]) -> Result<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, |r| r.as_ref().len());
        let mut matrix = Self::new(rows, cols)?;
        matrix.set_all(grid)?;
        Ok(matrix)
    }

    /// The `size x size` identity matrix.
    ///
    /// # Errors
    /// * `MatrixError::InvalidDimension` - `size` is zero
    pub fn identity(size: usize) -> Result<Self> {
        let mut matrix = Self::new(size, size)?;
        for i in 0..size {
            matrix.data[i * size + i] = T::one();
        }
        Ok(matrix)
    }

    /// Build a 4x4 matrix directly from an array; the shape is correct by
    /// construction.
    pub(crate) fn from_array4(grid: [[T; 4]; 4]) -> Self {
        Self {
            rows: 4,
            cols: 4,
            data: grid.iter().flat_map(|r| r.iter().copied()).collect(),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// All elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Element at `(row, col)`.
    ///
    /// # Errors
    /// * `MatrixError::IndexOutOfRange` - the index lies outside the matrix
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let idx = self.offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Overwrite the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Borrow row `row` as a slice.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        let start = self.offset(row, 0)?;
        Ok(&self.data[start..start + self.cols])
    }

    /// Replace row `row` with `values`.
    ///
    /// # Errors
    /// * `MatrixError::IndexOutOfRange` - `row >= rows`
    /// * `MatrixError::DimensionMismatch` - `values.len() != cols`
    pub fn set_row(&mut self, row: usize, values: &[T]) -> Result<()> {
        let start = self.offset(row, 0)?;
        if values.len() != self.cols {
            return Err(MatrixError::DimensionMismatch {
                expected: (1, self.cols),
                found: (1, values.len()),
            });
        }
        self.data[start..start + self.cols].copy_from_slice(values);
        Ok(())
    }

    /// Load every element from a grid of exactly `rows x cols`.
    ///
    /// The whole grid is validated before anything is written, so a failed
    /// call leaves the matrix untouched.
    pub fn set_all<R: AsRef<[T]>>(&mut self, grid: &[R]) -> Result<()> {
        let ragged = grid
            .iter()
            .map(|r| r.as_ref().len())
            .find(|&len| len != self.cols);
        if grid.len() != self.rows || ragged.is_some() {
            return Err(MatrixError::DimensionMismatch {
                expected: self.shape(),
                found: (grid.len(), ragged.unwrap_or(self.cols)),
            });
        }
        for (dst, src) in self.data.chunks_exact_mut(self.cols).zip(grid) {
            dst.copy_from_slice(src.as_ref());
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------

    /// Same shape and every pair of elements within `epsilon` (absolute).
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| a.approx_eq(b, epsilon))
    }

    /// [`approx_eq`](Self::approx_eq) with the crate-wide `EPSILON` of 1e-5.
    pub fn equals(&self, other: &Self) -> bool {
        self.approx_eq(other, T::epsilon())
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    /// Matrix product `self * other`.
    ///
    /// # Errors
    /// * `MatrixError::DimensionMismatch` - `self.cols() != other.rows()`
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.cols, other.cols),
                found: other.shape(),
            });
        }
        Ok(self.product(other))
    }

    /// Row-by-column product; the caller has checked `self.cols == other.rows`.
    pub(crate) fn product(&self, other: &Self) -> Self {
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                data.push((0..self.cols).fold(T::zero(), |acc, k| {
                    acc + self.data[i * self.cols + k] * other.data[k * other.cols + j]
                }));
            }
        }
        Self {
            rows: self.rows,
            cols: other.cols,
            data,
        }
    }

    /// Product with a column vector given as a plain scalar slice; the result
    /// is a `rows x 1` matrix.
    pub fn multiply_column(&self, column: &[T]) -> Result<Self> {
        if column.len() != self.cols {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.cols, 1),
                found: (column.len(), 1),
            });
        }
        let mut result = Self::new(self.rows, 1)?;
        for (i, row) in self.data.chunks_exact(self.cols).enumerate() {
            result.data[i] = row
                .iter()
                .zip(column)
                .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
        }
        Ok(result)
    }

    /// New `cols x rows` matrix with `result[j][i] == self[i][j]`.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    // ------------------------------------------------------------------
    // Determinant and friends
    // ------------------------------------------------------------------

    /// Determinant by cofactor expansion along row 0.
    ///
    /// # Errors
    /// * `MatrixError::NotSquareOrTooSmall` - the matrix is smaller than 2x2
    ///   or not square
    pub fn determinant(&self) -> Result<T> {
        if self.rows < 2 || self.cols < 2 || !self.is_square() {
            return Err(MatrixError::NotSquareOrTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.expand())
    }

    /// Cofactor expansion for a square matrix of any positive size. A 1x1
    /// matrix expands to its single element.
    fn expand(&self) -> T {
        match self.rows {
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            n => (0..n).fold(T::zero(), |acc, c| {
                acc + self.data[c] * self.expand_cofactor(0, c)
            }),
        }
    }

    fn expand_cofactor(&self, row: usize, col: usize) -> T {
        let minor = self.remove(row, col).expand();
        if (row + col) % 2 == 0 { minor } else { -minor }
    }

    /// Copy of `self` without `row` and `col`. Caller guarantees both are in
    /// range and the matrix is at least 2x2.
    fn remove(&self, row: usize, col: usize) -> Self {
        let data = self
            .data
            .chunks_exact(self.cols)
            .enumerate()
            .filter(|&(i, _)| i != row)
            .flat_map(|(_, r)| {
                r.iter()
                    .enumerate()
                    .filter(move |&(j, _)| j != col)
                    .map(|(_, &v)| v)
            })
            .collect();
        Self {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        }
    }

    /// Copy of `self` with `row` and `col` removed; remaining cells keep their
    /// relative order.
    ///
    /// # Errors
    /// * `MatrixError::IndexOutOfRange` - `row` or `col` is outside the matrix
    /// * `MatrixError::InvalidDimension` - the result would have no cells
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Self> {
        self.offset(row, col)?;
        if self.rows < 2 || self.cols < 2 {
            return Err(MatrixError::InvalidDimension {
                rows: self.rows - 1,
                cols: self.cols - 1,
            });
        }
        Ok(self.remove(row, col))
    }

    /// Determinant of the submatrix without `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<T> {
        self.submatrix(row, col)?.determinant()
    }

    /// Minor at `(row, col)` with sign `(-1)^(row + col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        let minor = self.minor(row, col)?;
        Ok(if (row + col) % 2 == 0 { minor } else { -minor })
    }

    /// Whether [`inverse`](Self::inverse) would succeed.
    pub fn is_invertible(&self) -> bool {
        matches!(self.determinant(), Ok(det) if det != T::zero())
    }

    /// Inverse via the transposed cofactor matrix divided by the determinant.
    ///
    /// Invertibility is an exact test: a determinant of `1e-300` is accepted.
    /// A 2x2 matrix is inverted with 1x1 cofactors (its single remaining
    /// element) even though [`cofactor`](Self::cofactor) itself is undefined
    /// there.
    ///
    /// # Errors
    /// * `MatrixError::NotSquare` - `rows != cols`
    /// * `MatrixError::NotSquareOrTooSmall` - the matrix is 1x1
    /// * `MatrixError::Singular` - the determinant is exactly zero
    pub fn inverse(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let det = self.determinant()?;
        if det == T::zero() {
            tracing::debug!(rows = self.rows, "refusing to invert singular matrix");
            return Err(MatrixError::Singular);
        }

        let n = self.rows;
        let mut result = Self::new(n, n)?;
        for i in 0..n {
            for j in 0..n {
                // Writing to (j, i) transposes the cofactor matrix in place.
                result.data[j * n + i] = self.expand_cofactor(i, j) / det;
            }
        }
        Ok(result)
    }
}

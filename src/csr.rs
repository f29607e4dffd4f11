//! Compressed-sparse-row matrix with dynamic insert, update and delete.

use crate::vector::ensure_same_size;
use crate::{DynamicMatrix, DynamicVector, Limits, MatrixError, Result, Scalar};
use std::collections::BTreeMap;
use std::ops::Index;

/// An `rows x cols` sparse matrix storing only non-zero entries.
///
/// Each row keeps a column-ordered map, so iteration is deterministic and
/// [`to_parts`](Self::to_parts) yields classic CSR arrays with ascending
/// column indices per row. Writing zero removes an entry; no stored value is
/// ever zero.
///
/// # Example
/// ```rust
/// use tmatrix::CsrMatrix;
///
/// let mut m = CsrMatrix::<i32>::new(2, 2).unwrap();
/// m.set(0, 0, 5).unwrap();
/// m.set(0, 0, 10).unwrap();
/// assert_eq!(m.non_zeros(), 1);
/// m.set(0, 0, 0).unwrap();
/// assert_eq!(m.non_zeros(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<T> {
    cols: usize,
    rows: Vec<BTreeMap<usize, T>>,
    nnz: usize,
    zero: T,
}

/// Flat compressed-sparse-row arrays.
///
/// Row `i` occupies `col_idx[row_ptr[i]..row_ptr[i + 1]]` and the matching
/// range of `values`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrParts<T> {
    pub row_ptr: Vec<usize>,
    pub col_idx: Vec<usize>,
    pub values: Vec<T>,
}

impl<T: Scalar> CsrMatrix<T> {
    /// Create an empty `rows x cols` matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::Dimension`] if either dimension is zero or
    /// exceeds the default matrix limit.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::with_limits(rows, cols, &Limits::default())
    }

    pub fn with_limits(rows: usize, cols: usize, limits: &Limits) -> Result<Self> {
        limits.check_shape(rows, cols)?;
        log::debug!("CsrMatrix::new: shape={rows}x{cols}");
        Ok(Self {
            cols,
            rows: vec![BTreeMap::new(); rows],
            nnz: 0,
            zero: T::zero(),
        })
    }

    /// Build from a dense matrix, dropping zero entries.
    pub fn from_dense(dense: &DynamicMatrix<T>) -> Result<Self> {
        Self::from_dense_with_limits(dense, &Limits::default())
    }

    pub fn from_dense_with_limits(dense: &DynamicMatrix<T>, limits: &Limits) -> Result<Self> {
        let n = dense.size();
        let mut m = Self::with_limits(n, n, limits)?;
        for (i, row) in dense.rows().enumerate() {
            for (j, &x) in row.iter().enumerate() {
                m.set(i, j, x)?;
            }
        }
        Ok(m)
    }

    #[inline]
    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows.len() {
            return Err(MatrixError::Index {
                index: row,
                bound: self.rows.len(),
            });
        }
        if col >= self.cols {
            return Err(MatrixError::Index {
                index: col,
                bound: self.cols,
            });
        }
        Ok(())
    }

    /// Write `(row, col)`: zero deletes, non-zero inserts or updates.
    ///
    /// # Errors
    /// Returns [`MatrixError::Index`] if the position is outside the shape.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_index(row, col)?;
        let entries = &mut self.rows[row];
        if value.is_zero() {
            if entries.remove(&col).is_some() {
                self.nnz -= 1;
                log::trace!("CsrMatrix::set: removed ({row}, {col}), nnz={}", self.nnz);
            }
        } else if entries.insert(col, value).is_none() {
            self.nnz += 1;
            log::trace!("CsrMatrix::set: inserted ({row}, {col}), nnz={}", self.nnz);
        }
        Ok(())
    }

    /// Read `(row, col)`; absent entries read as zero.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_index(row, col)?;
        Ok(self.rows[row].get(&col).copied().unwrap_or(self.zero))
    }

    /// Sparse-times-dense product.
    ///
    /// # Errors
    /// Returns [`MatrixError::SizeMismatch`] if `v.size() != self.cols()`.
    pub fn mul_vector(&self, v: &DynamicVector<T>) -> Result<DynamicVector<T>> {
        ensure_same_size(self.cols, v.size())?;
        let values = self
            .rows
            .iter()
            .map(|entries| {
                entries
                    .iter()
                    .fold(T::zero(), |acc, (&j, &x)| acc + x * v[j])
            })
            .collect();
        Ok(DynamicVector::from_raw(values))
    }

    /// The `cols x rows` transpose.
    pub fn transpose(&self) -> Self {
        let mut rows = vec![BTreeMap::new(); self.cols];
        for (i, j, x) in self.iter() {
            rows[j].insert(i, x);
        }
        Self {
            cols: self.rows.len(),
            rows,
            nnz: self.nnz,
            zero: self.zero,
        }
    }

    /// Export as flat CSR arrays.
    pub fn to_parts(&self) -> CsrParts<T> {
        let mut row_ptr = Vec::with_capacity(self.rows.len() + 1);
        let mut col_idx = Vec::with_capacity(self.nnz);
        let mut values = Vec::with_capacity(self.nnz);
        row_ptr.push(0);
        for entries in &self.rows {
            for (&j, &x) in entries {
                col_idx.push(j);
                values.push(x);
            }
            row_ptr.push(col_idx.len());
        }
        CsrParts {
            row_ptr,
            col_idx,
            values,
        }
    }
}

impl<T> CsrMatrix<T> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of stored entries.
    #[inline]
    pub fn non_zeros(&self) -> usize {
        self.nnz
    }
}

impl<T: Copy> CsrMatrix<T> {
    /// Stored entries of `row` as `(col, value)`, ascending by column.
    ///
    /// # Errors
    /// Returns [`MatrixError::Index`] if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> Result<impl Iterator<Item = (usize, T)> + '_> {
        let bound = self.rows.len();
        let entries = self
            .rows
            .get(row)
            .ok_or(MatrixError::Index { index: row, bound })?;
        Ok(entries.iter().map(|(&j, &x)| (j, x)))
    }

    /// All stored entries as `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, entries)| entries.iter().map(move |(&j, &x)| (i, j, x)))
    }
}

impl<T> Index<(usize, usize)> for CsrMatrix<T> {
    type Output = T;

    /// Read operator equivalent to [`CsrMatrix::get`]; panics out of range.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            col < self.cols,
            "column {col} out of range for {} columns",
            self.cols
        );
        self.rows[row].get(&col).unwrap_or(&self.zero)
    }
}

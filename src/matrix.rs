//! Dense square matrix stored as rows of [`DynamicVector`].

use crate::vector::ensure_same_size;
use crate::{DynamicVector, Limits, MatrixError, Result, Scalar};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A dense `n x n` matrix.
///
/// Rows are [`DynamicVector`]s of length `n`, so `m[i][j]` composes the
/// unchecked row and element operators while [`at`](Self::at) and
/// [`get`](Self::get) are the checked paths.
///
/// # Example
/// ```rust
/// use tmatrix::DynamicMatrix;
///
/// let a = DynamicMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = DynamicMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = a.multiply(&b).unwrap();
/// assert_eq!(c, DynamicMatrix::from_rows(vec![vec![19, 22], vec![43, 50]]).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicMatrix<T> {
    rows: Vec<DynamicVector<T>>,
}

impl<T: Scalar> DynamicMatrix<T> {
    /// Create a zero-filled `size x size` matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::Size`] if `size` exceeds the default matrix limit.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_limits(size, &Limits::default())
    }

    /// Create a zero-filled `size x size` matrix, validated against `limits`.
    ///
    /// Only `limits.max_matrix_size` applies; rows are not checked against
    /// the vector limit.
    pub fn with_limits(size: usize, limits: &Limits) -> Result<Self> {
        limits.check_square(size)?;
        log::debug!("DynamicMatrix::new: size={size}");
        Ok(Self::zeroed(size))
    }

    /// Zero-filled matrix whose size was already validated by the caller.
    pub(crate) fn zeroed(size: usize) -> Self {
        Self {
            rows: vec![DynamicVector::from_raw(vec![T::zero(); size]); size],
        }
    }

    /// The `size x size` identity matrix.
    pub fn identity(size: usize) -> Result<Self> {
        Self::identity_with_limits(size, &Limits::default())
    }

    pub fn identity_with_limits(size: usize, limits: &Limits) -> Result<Self> {
        let mut m = Self::with_limits(size, limits)?;
        for (i, row) in m.rows.iter_mut().enumerate() {
            row[i] = T::one();
        }
        Ok(m)
    }

    /// Build a matrix from row-major nested vectors.
    ///
    /// # Errors
    /// Returns [`MatrixError::ShapeMismatch`] if any row length differs from
    /// the number of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows_with_limits(rows, &Limits::default())
    }

    pub fn from_rows_with_limits(rows: Vec<Vec<T>>, limits: &Limits) -> Result<Self> {
        let n = rows.len();
        limits.check_square(n)?;
        let rows = rows
            .into_iter()
            .map(|row| {
                if row.len() != n {
                    return Err(MatrixError::ShapeMismatch(vec![n, n], vec![n, row.len()]));
                }
                Ok(DynamicVector::from_raw(row))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }
}

impl<T> DynamicMatrix<T> {
    /// Returns the matrix dimension `n`.
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> std::slice::Iter<'_, DynamicVector<T>> {
        self.rows.iter()
    }

    /// Checked row access.
    ///
    /// # Errors
    /// Returns [`MatrixError::Index`] if `row >= self.size()`.
    pub fn at(&self, row: usize) -> Result<&DynamicVector<T>> {
        let bound = self.rows.len();
        self.rows
            .get(row)
            .ok_or(MatrixError::Index { index: row, bound })
    }

    /// Checked mutable row access.
    pub fn at_mut(&mut self, row: usize) -> Result<&mut DynamicVector<T>> {
        let bound = self.rows.len();
        self.rows
            .get_mut(row)
            .ok_or(MatrixError::Index { index: row, bound })
    }
}

impl<T: Copy> DynamicMatrix<T> {
    /// Checked element read: validates the row, then the column.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.at(row)?.at(col).copied()
    }

    /// Checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.at_mut(row)?.at_mut(col)? = value;
        Ok(())
    }
}

impl<T: Clone> DynamicMatrix<T> {
    /// Replace this matrix's size and contents with a copy of `source`.
    pub fn assign(&mut self, source: &Self) {
        if self.rows.len() != source.rows.len() {
            log::debug!(
                "DynamicMatrix::assign: resizing {} -> {}",
                self.rows.len(),
                source.rows.len()
            );
        }
        self.rows.clone_from(&source.rows);
    }
}

impl<T: Scalar> DynamicMatrix<T> {
    fn zip_rows(
        &self,
        other: &Self,
        f: impl Fn(&DynamicVector<T>, &DynamicVector<T>) -> Result<DynamicVector<T>>,
    ) -> Result<Self> {
        ensure_same_size(self.size(), other.size())?;
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Elementwise sum.
    ///
    /// # Errors
    /// Returns [`MatrixError::SizeMismatch`] if the dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_rows(other, DynamicVector::add)
    }

    /// Elementwise difference.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_rows(other, DynamicVector::sub)
    }

    /// Multiply every element by `value`.
    pub fn mul_scalar(&self, value: T) -> Self {
        Self {
            rows: self.rows.iter().map(|row| row.mul_scalar(value)).collect(),
        }
    }

    /// Matrix product `C(i,j) = sum_k A(i,k) * B(k,j)`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        let n = self.size();
        ensure_same_size(n, other.size())?;
        log::debug!("DynamicMatrix::multiply: n={n}");

        let mut out = self.clone();
        for (dst, a_row) in out.rows.iter_mut().zip(&self.rows) {
            // i-k-j order: walk B row by row so the inner loop is contiguous.
            let acc = dst.as_mut_slice();
            acc.fill(T::zero());
            for (&a_ik, b_row) in a_row.iter().zip(&other.rows) {
                for (c, &b_kj) in acc.iter_mut().zip(b_row.iter()) {
                    *c = *c + a_ik * b_kj;
                }
            }
        }
        Ok(out)
    }

    /// Matrix-vector product `r(i) = sum_j A(i,j) * v(j)`.
    ///
    /// # Errors
    /// Returns [`MatrixError::SizeMismatch`] if `v.size() != self.size()`.
    pub fn mul_vector(&self, v: &DynamicVector<T>) -> Result<DynamicVector<T>> {
        ensure_same_size(self.size(), v.size())?;
        let values = self
            .rows
            .iter()
            .map(|row| row.dot(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(DynamicVector::from_raw(values))
    }

    pub fn transpose(&self) -> Self {
        let mut out = self.clone();
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &x) in row.iter().enumerate() {
                out.rows[j][i] = x;
            }
        }
        out
    }
}

impl<T> Index<usize> for DynamicMatrix<T> {
    type Output = DynamicVector<T>;

    #[inline]
    fn index(&self, row: usize) -> &DynamicVector<T> {
        &self.rows[row]
    }
}

impl<T> IndexMut<usize> for DynamicMatrix<T> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut DynamicVector<T> {
        &mut self.rows[row]
    }
}

impl<T: fmt::Display> fmt::Display for DynamicMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[i32]]) -> DynamicMatrix<i32> {
        DynamicMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_create_and_size() {
        let m = DynamicMatrix::<i32>::new(5).unwrap();
        assert_eq!(m.size(), 5);
        assert!(m.rows().all(|row| row.size() == 5));
    }

    #[test]
    fn test_too_large_matrix_is_rejected() {
        assert!(DynamicMatrix::<i32>::new(crate::MAX_MATRIX_SIZE + 1).is_err());
        let limits = Limits::new(100, 4);
        assert_eq!(
            DynamicMatrix::<i32>::with_limits(5, &limits).unwrap_err(),
            MatrixError::Size { size: 5, max: 4 }
        );
    }

    #[test]
    fn test_matrix_is_bounded_by_matrix_limit_only() {
        let limits = Limits::new(2, 10);
        let m = DynamicMatrix::<i32>::with_limits(5, &limits).unwrap();
        assert_eq!(m.size(), 5);
        assert!(m.rows().all(|row| row.size() == 5));
        assert!(DynamicMatrix::<i32>::identity_with_limits(5, &limits).is_ok());
        assert!(DynamicMatrix::from_rows_with_limits(vec![vec![1, 2, 3]; 3], &limits).is_ok());
        assert!(DynamicMatrix::<i32>::with_limits(11, &limits).is_err());
    }

    #[test]
    fn test_injected_limits_apply_to_every_constructor() {
        let limits = Limits::new(100, 3);
        assert_eq!(
            DynamicMatrix::<i32>::identity_with_limits(5, &limits).unwrap_err(),
            MatrixError::Size { size: 5, max: 3 }
        );
        assert!(DynamicMatrix::from_rows_with_limits(vec![vec![0; 4]; 4], &limits).is_err());
        let id = DynamicMatrix::<i32>::identity_with_limits(3, &limits).unwrap();
        assert_eq!(id, DynamicMatrix::identity(3).unwrap());
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = DynamicMatrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(err, MatrixError::ShapeMismatch(vec![2, 2], vec![2, 1]));
    }

    #[test]
    fn test_copy_has_its_own_memory() {
        let mut m = matrix(&[&[3, 5], &[7, 2]]);
        let m1 = m.clone();
        assert_eq!(m, m1);
        m[0][0] = 10;
        assert_ne!(m[0][0], m1[0][0]);
        assert_eq!(m1[0][0], 3);
    }

    #[test]
    fn test_checked_access() {
        let mut m = DynamicMatrix::<i32>::new(3).unwrap();
        m.set(1, 1, 9).unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 9);
        assert_eq!(m[1][1], 9);
        assert_eq!(
            m.at(10).unwrap_err(),
            MatrixError::Index { index: 10, bound: 3 }
        );
        assert_eq!(
            m.set(0, 3, 5).unwrap_err(),
            MatrixError::Index { index: 3, bound: 3 }
        );
    }

    #[test]
    fn test_assign_changes_size() {
        let m1 = matrix(&[&[1, 3], &[5, 7]]);
        let mut m2 = DynamicMatrix::<i32>::new(4).unwrap();
        m2.assign(&m1);
        assert_eq!(m2.size(), 2);
        assert_eq!(m1, m2);

        let same = m2.clone();
        m2.assign(&same);
        assert_eq!(m2, m1);
    }

    #[test]
    fn test_equality() {
        let m = matrix(&[&[1, 0, 2], &[3, 4, 5], &[6, 7, 8]]);
        assert_eq!(m, m);
        assert_ne!(
            DynamicMatrix::<i32>::new(2).unwrap(),
            DynamicMatrix::<i32>::new(3).unwrap()
        );
    }

    #[test]
    fn test_add_sub_commute() {
        let m1 = matrix(&[&[1, 3], &[5, 7]]);
        let m2 = matrix(&[&[2, 4], &[6, 8]]);
        let sum = m1.add(&m2).unwrap();
        assert_eq!(sum, matrix(&[&[3, 7], &[11, 15]]));
        assert_eq!(sum, m2.add(&m1).unwrap());
        assert_eq!(
            matrix(&[&[10, 12], &[14, 16]])
                .sub(&matrix(&[&[1, 2], &[3, 4]]))
                .unwrap(),
            matrix(&[&[9, 10], &[11, 12]])
        );
    }

    #[test]
    fn test_products() {
        let a = matrix(&[&[1, 2], &[3, 4]]);
        let b = matrix(&[&[5, 6], &[7, 8]]);
        assert_eq!(a.multiply(&b).unwrap(), matrix(&[&[19, 22], &[43, 50]]));
        assert_eq!(
            matrix(&[&[2, 3], &[4, 5]]).mul_scalar(3),
            matrix(&[&[6, 9], &[12, 15]])
        );
        let v = DynamicVector::from_vec(vec![3, 2]).unwrap();
        assert_eq!(
            a.mul_vector(&v).unwrap(),
            DynamicVector::from_vec(vec![7, 17]).unwrap()
        );
        let id = DynamicMatrix::identity(2).unwrap();
        assert_eq!(a.multiply(&id).unwrap(), a);
    }

    #[test]
    fn test_mismatched_sizes_fail() {
        let a = DynamicMatrix::<i32>::new(2).unwrap();
        let b = DynamicMatrix::<i32>::new(3).unwrap();
        assert_eq!(a.add(&b).unwrap_err(), MatrixError::SizeMismatch(2, 3));
        assert!(a.sub(&b).is_err());
        assert!(a.multiply(&b).is_err());
        let v = DynamicVector::<i32>::new(3).unwrap();
        assert!(a.mul_vector(&v).is_err());
    }

    #[test]
    fn test_transpose_and_display() {
        let m = matrix(&[&[1, 2], &[3, 4]]);
        assert_eq!(m.transpose(), matrix(&[&[1, 3], &[2, 4]]));
        assert_eq!(m.to_string(), "1 2\n3 4\n");
    }
}

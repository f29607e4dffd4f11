//! Banded square matrices.
//!
//! All banded kinds share one [`BandMatrix`] type: a row-wise envelope store
//! plus a [`BandDomain`] policy deciding which logical positions exist and
//! where they live. The aliases [`GeneralBandMatrix`], [`SymmetricBandMatrix`]
//! and [`TriangleBandMatrix`] pick the policy.
//!
//! # Access contract
//!
//! - Reads outside the envelope (or outside the matrix) yield zero.
//! - Writes outside the envelope fail with [`MatrixError::Domain`]; writes
//!   outside the matrix fail with [`MatrixError::Index`].
//! - Positions rejected by the policy (the forbidden triangle of a
//!   [`TriangleBandMatrix`]) fail with [`MatrixError::Domain`] for reads too.
//!
//! # Example
//!
//! ```rust
//! use tmatrix::SymmetricBandMatrix;
//!
//! let mut s = SymmetricBandMatrix::<i32>::new(4, 1).unwrap();
//! s.set(0, 1, 5).unwrap();
//! assert_eq!(s.get(1, 0).unwrap(), 5);
//! assert_eq!(s[(0, 1)], 5);
//! ```

mod domain;
mod storage;

pub use domain::{BandDomain, General, Symmetric, Triangle};

use crate::vector::ensure_same_size;
use crate::{DynamicMatrix, DynamicVector, Limits, MatrixError, Result, Scalar};
use std::ops::Index;
use storage::{band_span, check_bandwidths, BandStorage};

/// Banded matrix with an arbitrary lower and upper bandwidth.
pub type GeneralBandMatrix<T> = BandMatrix<T, General>;

/// Banded matrix with `A(i,j) == A(j,i)`, storing only the lower band.
pub type SymmetricBandMatrix<T> = BandMatrix<T, Symmetric>;

/// Banded matrix restricted to the upper or lower triangle.
pub type TriangleBandMatrix<T> = BandMatrix<T, Triangle>;

/// A square matrix materializing only the entries inside its band envelope.
///
/// # Type Parameters
/// - `T`: Element type
/// - `D`: Domain policy (default: [`General`])
#[derive(Debug, Clone)]
pub struct BandMatrix<T, D: BandDomain = General> {
    storage: BandStorage<T>,
    domain: D,
    zero: T,
}

impl<T: Scalar, D: BandDomain> BandMatrix<T, D> {
    fn build(
        size: usize,
        stored_lower: usize,
        stored_upper: usize,
        domain: D,
        limits: &Limits,
    ) -> Result<Self> {
        limits.check_square(size)?;
        let (lower, upper) = domain.logical_bandwidths(stored_lower, stored_upper);
        check_bandwidths(size, lower, upper)?;
        log::debug!("BandMatrix::new: size={size} lower={lower} upper={upper} domain={domain:?}");
        Ok(Self::allocate(size, stored_lower, stored_upper, domain))
    }

    fn allocate(size: usize, stored_lower: usize, stored_upper: usize, domain: D) -> Self {
        Self {
            storage: BandStorage::new(size, stored_lower, stored_upper, T::zero()),
            domain,
            zero: T::zero(),
        }
    }
}

impl<T: Scalar> BandMatrix<T, General> {
    /// Create a zero band matrix of dimension `size`.
    ///
    /// # Errors
    /// Returns [`MatrixError::Bandwidth`] unless `lower < size` and
    /// `upper < size`, and [`MatrixError::Size`] if `size` exceeds the limit.
    pub fn new(size: usize, lower: usize, upper: usize) -> Result<Self> {
        Self::with_limits(size, lower, upper, &Limits::default())
    }

    pub fn with_limits(size: usize, lower: usize, upper: usize, limits: &Limits) -> Result<Self> {
        Self::build(size, lower, upper, General, limits)
    }

    /// Copy the envelope of a dense matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::Domain`] for the first non-zero entry outside
    /// the requested envelope.
    pub fn from_dense(dense: &DynamicMatrix<T>, lower: usize, upper: usize) -> Result<Self> {
        Self::from_dense_with_limits(dense, lower, upper, &Limits::default())
    }

    pub fn from_dense_with_limits(
        dense: &DynamicMatrix<T>,
        lower: usize,
        upper: usize,
        limits: &Limits,
    ) -> Result<Self> {
        let mut m = Self::with_limits(dense.size(), lower, upper, limits)?;
        for (i, row) in dense.rows().enumerate() {
            for (j, &x) in row.iter().enumerate() {
                if !x.is_zero() {
                    m.set(i, j, x)?;
                }
            }
        }
        Ok(m)
    }
}

impl<T: Scalar> BandMatrix<T, Symmetric> {
    /// Create a zero symmetric band matrix with `bandwidth` on each side.
    pub fn new(size: usize, bandwidth: usize) -> Result<Self> {
        Self::with_limits(size, bandwidth, &Limits::default())
    }

    pub fn with_limits(size: usize, bandwidth: usize, limits: &Limits) -> Result<Self> {
        Self::build(size, bandwidth, 0, Symmetric, limits)
    }
}

impl<T: Scalar> BandMatrix<T, Triangle> {
    /// Create a zero triangular band matrix. `upper` selects the triangle
    /// `j >= i`; otherwise only `j <= i` is addressable.
    pub fn new(size: usize, bandwidth: usize, upper: bool) -> Result<Self> {
        Self::with_limits(size, bandwidth, upper, &Limits::default())
    }

    pub fn with_limits(
        size: usize,
        bandwidth: usize,
        upper: bool,
        limits: &Limits,
    ) -> Result<Self> {
        if upper {
            Self::build(size, 0, bandwidth, Triangle::upper(), limits)
        } else {
            Self::build(size, bandwidth, 0, Triangle::lower(), limits)
        }
    }

    #[inline]
    pub fn is_upper_triangle(&self) -> bool {
        self.domain.is_upper()
    }

    #[inline]
    pub fn is_lower_triangle(&self) -> bool {
        self.domain.is_lower()
    }
}

impl<T: Scalar, D: BandDomain> BandMatrix<T, D> {
    /// Returns the matrix dimension `n`.
    #[inline]
    pub fn size(&self) -> usize {
        self.storage.size()
    }

    /// Logical `(lower, upper)` bandwidths.
    #[inline]
    pub fn bandwidths(&self) -> (usize, usize) {
        self.domain
            .logical_bandwidths(self.storage.lower(), self.storage.upper())
    }

    #[inline]
    pub fn lower_bandwidth(&self) -> usize {
        self.bandwidths().0
    }

    #[inline]
    pub fn upper_bandwidth(&self) -> usize {
        self.bandwidths().1
    }

    #[inline]
    pub fn domain(&self) -> &D {
        &self.domain
    }

    /// True if `(row, col)` is a writable position.
    pub fn is_in_band(&self, row: usize, col: usize) -> bool {
        self.domain
            .locate(row, col)
            .is_some_and(|(r, c)| self.storage.contains(r, c))
    }

    /// Read `(row, col)`; positions outside the envelope read as zero.
    ///
    /// # Errors
    /// Returns [`MatrixError::Domain`] if the policy forbids the position.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let (r, c) = self
            .domain
            .locate(row, col)
            .ok_or(MatrixError::Domain { row, col })?;
        Ok(self.storage.get(r, c).copied().unwrap_or(self.zero))
    }

    /// Write `(row, col)`.
    ///
    /// # Errors
    /// - [`MatrixError::Index`] if `row` or `col` is not below `size()`
    /// - [`MatrixError::Domain`] if the position is outside the envelope or
    ///   forbidden by the policy
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let bound = self.size();
        for index in [row, col] {
            if index >= bound {
                return Err(MatrixError::Index { index, bound });
            }
        }
        let slot = self
            .domain
            .locate(row, col)
            .and_then(|(r, c)| self.storage.get_mut(r, c))
            .ok_or(MatrixError::Domain { row, col })?;
        *slot = value;
        Ok(())
    }

    /// Value at `(row, col)` with forbidden positions read as zero.
    #[inline]
    fn entry(&self, row: usize, col: usize) -> T {
        self.domain
            .locate(row, col)
            .and_then(|(r, c)| self.storage.get(r, c).copied())
            .unwrap_or(self.zero)
    }

    /// Expand into a dense matrix.
    pub fn to_dense(&self) -> DynamicMatrix<T> {
        let n = self.size();
        let (lower, upper) = self.bandwidths();
        let mut dense = DynamicMatrix::zeroed(n);
        for i in 0..n {
            let (first, last) = band_span(n, i, lower, upper);
            for j in first..=last {
                dense[i][j] = self.entry(i, j);
            }
        }
        dense
    }

    /// Multiply every stored entry by `value`.
    pub fn mul_scalar(&self, value: T) -> Self {
        let mut out = self.clone();
        for row in 0..out.size() {
            let (first, last) = out.storage.row_span(row);
            for col in first..=last {
                if let Some(x) = out.storage.get_mut(row, col) {
                    *x = *x * value;
                }
            }
        }
        out
    }

    /// Elementwise sum; the result envelope is the union of both envelopes.
    ///
    /// # Errors
    /// Returns [`MatrixError::SizeMismatch`] if the dimensions differ.
    pub fn add<D2: BandDomain>(&self, other: &BandMatrix<T, D2>) -> Result<GeneralBandMatrix<T>> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference; the result envelope is the union of both envelopes.
    pub fn sub<D2: BandDomain>(&self, other: &BandMatrix<T, D2>) -> Result<GeneralBandMatrix<T>> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with<D2: BandDomain>(
        &self,
        other: &BandMatrix<T, D2>,
        f: impl Fn(T, T) -> T,
    ) -> Result<GeneralBandMatrix<T>> {
        let n = self.size();
        ensure_same_size(n, other.size())?;
        let (al, au) = self.bandwidths();
        let (bl, bu) = other.bandwidths();
        let mut out = GeneralBandMatrix::allocate(n, al.max(bl), au.max(bu), General);
        for i in 0..n {
            let (first, last) = out.storage.row_span(i);
            for j in first..=last {
                let value = f(self.entry(i, j), other.entry(i, j));
                if let Some(slot) = out.storage.get_mut(i, j) {
                    *slot = value;
                }
            }
        }
        Ok(out)
    }

    /// Band-times-vector product, summing only over each row's envelope.
    ///
    /// # Errors
    /// Returns [`MatrixError::SizeMismatch`] if `v.size() != self.size()`.
    pub fn mul_vector(&self, v: &DynamicVector<T>) -> Result<DynamicVector<T>> {
        let n = self.size();
        ensure_same_size(n, v.size())?;
        let (lower, upper) = self.bandwidths();
        let values = (0..n)
            .map(|i| {
                let (first, last) = band_span(n, i, lower, upper);
                (first..=last).fold(T::zero(), |acc, j| acc + self.entry(i, j) * v[j])
            })
            .collect();
        Ok(DynamicVector::from_raw(values))
    }

    /// Matrix product of two band matrices of equal size.
    ///
    /// The result is a general band matrix with bandwidths
    /// `min(a.lower + b.lower, n - 1)` and `min(a.upper + b.upper, n - 1)`.
    /// Each `C(i,j)` sums only over the `k` where both `A(i,k)` and `B(k,j)`
    /// can be non-zero.
    pub fn multiply<D2: BandDomain>(
        &self,
        other: &BandMatrix<T, D2>,
    ) -> Result<GeneralBandMatrix<T>> {
        let n = self.size();
        ensure_same_size(n, other.size())?;
        let (al, au) = self.bandwidths();
        let (bl, bu) = other.bandwidths();
        let lower = (al + bl).min(n - 1);
        let upper = (au + bu).min(n - 1);
        log::debug!(
            "BandMatrix::multiply: n={n} a=({al},{au}) b=({bl},{bu}) -> ({lower},{upper})"
        );

        let mut out = GeneralBandMatrix::allocate(n, lower, upper, General);
        for i in 0..n {
            let (first, last) = band_span(n, i, lower, upper);
            for j in first..=last {
                // A(i,k): i - al <= k <= i + au; B(k,j): j - bu <= k <= j + bl.
                let k_lo = i.saturating_sub(al).max(j.saturating_sub(bu));
                let k_hi = (i + au).min(j + bl).min(n - 1);
                let mut acc = T::zero();
                for k in k_lo..=k_hi {
                    acc = acc + self.entry(i, k) * other.entry(k, j);
                }
                if let Some(slot) = out.storage.get_mut(i, j) {
                    *slot = acc;
                }
            }
        }
        Ok(out)
    }
}

impl<T: Scalar, D: BandDomain> PartialEq for BandMatrix<T, D> {
    /// Padding slots are ignored; only envelope entries are compared.
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain
            && self.size() == other.size()
            && self.storage.lower() == other.storage.lower()
            && self.storage.upper() == other.storage.upper()
            && self
                .storage
                .positions()
                .all(|(i, j)| self.storage.get(i, j) == other.storage.get(i, j))
    }
}

impl<T: Scalar, D: BandDomain> Index<(usize, usize)> for BandMatrix<T, D> {
    type Output = T;

    /// Read operator: same contract as [`BandMatrix::get`], panicking where
    /// `get` would return an error.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.domain.locate(row, col) {
            Some((r, c)) => self.storage.get(r, c).unwrap_or(&self.zero),
            None => panic!("position ({row}, {col}) is outside the matrix domain"),
        }
    }
}

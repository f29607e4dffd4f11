//! Resizable, bounds-checked 1-D container.

use crate::{Limits, MatrixError, Result, Scalar};
use std::fmt;
use std::ops::{Index, IndexMut};

/// An owned vector of `T` with a length fixed at construction.
///
/// The length changes only through [`assign`](Self::assign), which replaces
/// both size and contents with those of the source. Cloning deep-copies.
///
/// # Example
/// ```rust
/// use tmatrix::DynamicVector;
///
/// let v = DynamicVector::from_vec(vec![2, 4, 6]).unwrap();
/// let w = DynamicVector::from_vec(vec![3, 5, 7]).unwrap();
/// assert_eq!(v.dot(&w).unwrap(), 68);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicVector<T> {
    data: Vec<T>,
}

impl<T: Scalar> DynamicVector<T> {
    /// Create a zero-filled vector of length `size`.
    ///
    /// # Errors
    /// Returns [`MatrixError::Size`] if `size` exceeds the default limit.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_limits(size, &Limits::default())
    }

    /// Create a zero-filled vector of length `size`, validated against `limits`.
    pub fn with_limits(size: usize, limits: &Limits) -> Result<Self> {
        Self::filled_with_limits(size, T::zero(), limits)
    }

    /// Create a vector of length `size` with every element set to `value`.
    pub fn filled(size: usize, value: T) -> Result<Self> {
        Self::filled_with_limits(size, value, &Limits::default())
    }

    pub fn filled_with_limits(size: usize, value: T, limits: &Limits) -> Result<Self> {
        limits.check_vector(size)?;
        log::debug!("DynamicVector::new: size={size}");
        Ok(Self {
            data: vec![value; size],
        })
    }

    /// Take ownership of `data` as the vector contents.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        Self::from_vec_with_limits(data, &Limits::default())
    }

    pub fn from_vec_with_limits(data: Vec<T>, limits: &Limits) -> Result<Self> {
        limits.check_vector(data.len())?;
        Ok(Self { data })
    }

    /// Copy `data` into a new vector.
    pub fn from_slice(data: &[T]) -> Result<Self> {
        Self::from_slice_with_limits(data, &Limits::default())
    }

    pub fn from_slice_with_limits(data: &[T], limits: &Limits) -> Result<Self> {
        limits.check_vector(data.len())?;
        Ok(Self {
            data: data.to_vec(),
        })
    }
}

impl<T> DynamicVector<T> {
    /// Wrap `data` whose length was already validated by the caller.
    #[inline]
    pub(crate) fn from_raw(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> DynamicVector<T> {
    /// Returns the number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Checked element access.
    ///
    /// # Errors
    /// Returns [`MatrixError::Index`] if `index >= self.size()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        let bound = self.data.len();
        self.data
            .get(index)
            .ok_or(MatrixError::Index { index, bound })
    }

    /// Checked mutable element access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let bound = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(MatrixError::Index { index, bound })
    }

    /// Exchange contents (and sizes) with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
    }
}

impl<T: Clone> DynamicVector<T> {
    /// Replace this vector's size and contents with a copy of `source`.
    ///
    /// The borrow rules keep `source` from aliasing `self`, so a
    /// self-assignment can only arrive as a copy and leaves contents unchanged.
    pub fn assign(&mut self, source: &Self) {
        if self.data.len() != source.data.len() {
            log::debug!(
                "DynamicVector::assign: resizing {} -> {}",
                self.data.len(),
                source.data.len()
            );
        }
        self.data.clone_from(&source.data);
    }
}

impl<T: Scalar> DynamicVector<T> {
    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    fn zip_map(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        ensure_same_size(self.size(), other.size())?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// Add `value` to every element.
    pub fn add_scalar(&self, value: T) -> Self {
        self.map(|x| x + value)
    }

    /// Subtract `value` from every element.
    pub fn sub_scalar(&self, value: T) -> Self {
        self.map(|x| x - value)
    }

    /// Multiply every element by `value`.
    pub fn mul_scalar(&self, value: T) -> Self {
        self.map(|x| x * value)
    }

    /// Elementwise sum.
    ///
    /// # Errors
    /// Returns [`MatrixError::SizeMismatch`] if the lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Elementwise difference.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, |a, b| a - b)
    }

    /// Dot product `sum_i self[i] * other[i]`.
    pub fn dot(&self, other: &Self) -> Result<T> {
        ensure_same_size(self.size(), other.size())?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }
}

#[inline]
pub(crate) fn ensure_same_size(a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(MatrixError::SizeMismatch(a, b));
    }
    Ok(())
}

impl<T> Index<usize> for DynamicVector<T> {
    type Output = T;

    /// Unchecked form: panics when `index` is out of range.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DynamicVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T> IntoIterator for &'a DynamicVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{x}")?;
        }
        Ok(())
    }
}

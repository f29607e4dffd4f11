//! Admissibility policies that turn one band storage into several matrix kinds.
//!
//! A [`BandDomain`] decides, for a logical position `(i, j)`, which stored
//! slot answers for it, or that the position is outside the matrix kind
//! entirely. The storage then decides whether that slot is inside the
//! envelope. Three policies cover the banded family:
//!
//! | policy              | stored envelope | `(i, j)` maps to         | forbidden     |
//! |---------------------|-----------------|--------------------------|---------------|
//! | [`General`]         | `(bl, bu)`      | `(i, j)`                 | none          |
//! | [`Symmetric`]       | `(b, 0)`        | `(max(i,j), min(i,j))`   | none          |
//! | [`Triangle`] upper  | `(0, b)`        | `(i, j)`                 | `j < i`       |
//! | [`Triangle`] lower  | `(b, 0)`        | `(i, j)`                 | `j > i`       |

use std::fmt::Debug;

/// Domain predicate plugged into [`BandMatrix`](super::BandMatrix).
pub trait BandDomain: Clone + Debug + PartialEq {
    /// Map a logical position to the stored position answering for it.
    ///
    /// Returns `None` when the position lies outside this matrix kind's
    /// domain, in which case both reads and writes are rejected.
    fn locate(&self, row: usize, col: usize) -> Option<(usize, usize)>;

    /// Logical `(lower, upper)` bandwidths given the stored envelope.
    #[inline]
    fn logical_bandwidths(&self, stored_lower: usize, stored_upper: usize) -> (usize, usize) {
        (stored_lower, stored_upper)
    }
}

/// Every position is addressable; only the envelope limits storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct General;

impl BandDomain for General {
    #[inline]
    fn locate(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        Some((row, col))
    }
}

/// Only the lower triangle is stored; upper reads and writes are mirrored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Symmetric;

impl BandDomain for Symmetric {
    #[inline]
    fn locate(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        if row < col {
            Some((col, row))
        } else {
            Some((row, col))
        }
    }

    #[inline]
    fn logical_bandwidths(&self, stored_lower: usize, _stored_upper: usize) -> (usize, usize) {
        (stored_lower, stored_lower)
    }
}

/// One side of the diagonal, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    upper: bool,
}

impl Triangle {
    pub fn upper() -> Self {
        Self { upper: true }
    }

    pub fn lower() -> Self {
        Self { upper: false }
    }

    #[inline]
    pub fn is_upper(&self) -> bool {
        self.upper
    }

    #[inline]
    pub fn is_lower(&self) -> bool {
        !self.upper
    }
}

impl BandDomain for Triangle {
    #[inline]
    fn locate(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        let permitted = if self.upper { col >= row } else { col <= row };
        permitted.then_some((row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_is_identity() {
        assert_eq!(General.locate(3, 1), Some((3, 1)));
        assert_eq!(General.logical_bandwidths(2, 1), (2, 1));
    }

    #[test]
    fn test_symmetric_folds_to_lower() {
        assert_eq!(Symmetric.locate(0, 1), Some((1, 0)));
        assert_eq!(Symmetric.locate(1, 0), Some((1, 0)));
        assert_eq!(Symmetric.locate(2, 2), Some((2, 2)));
        assert_eq!(Symmetric.logical_bandwidths(2, 0), (2, 2));
    }

    #[test]
    fn test_triangle_forbids_other_side() {
        let upper = Triangle::upper();
        assert_eq!(upper.locate(0, 1), Some((0, 1)));
        assert_eq!(upper.locate(1, 1), Some((1, 1)));
        assert_eq!(upper.locate(1, 0), None);

        let lower = Triangle::lower();
        assert_eq!(lower.locate(1, 0), Some((1, 0)));
        assert_eq!(lower.locate(0, 1), None);
        assert!(lower.is_lower() && !lower.is_upper());
    }
}

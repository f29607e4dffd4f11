//! Row-wise band storage shared by every banded matrix kind.

use crate::{MatrixError, Result};

/// Physical storage for the envelope `i - j <= lower`, `j - i <= upper`.
///
/// Row `i` owns `lower + upper + 1` consecutive slots; slot `j + lower - i`
/// holds entry `(i, j)`. Slots that would fall left of column 0 or right of
/// column `size - 1` are padding and never addressed.
#[derive(Debug, Clone)]
pub(crate) struct BandStorage<T> {
    size: usize,
    lower: usize,
    upper: usize,
    data: Vec<T>,
}

/// Reject bandwidths that are not strictly smaller than `size`.
pub(crate) fn check_bandwidths(size: usize, lower: usize, upper: usize) -> Result<()> {
    if lower >= size || upper >= size {
        return Err(MatrixError::Bandwidth { lower, upper, size });
    }
    Ok(())
}

impl<T: Copy> BandStorage<T> {
    /// Allocate the envelope filled with `zero`. Bandwidths must already be
    /// validated.
    pub(crate) fn new(size: usize, lower: usize, upper: usize, zero: T) -> Self {
        let width = lower + upper + 1;
        Self {
            size,
            lower,
            upper,
            data: vec![zero; size * width],
        }
    }
}

impl<T> BandStorage<T> {
    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub(crate) fn lower(&self) -> usize {
        self.lower
    }

    #[inline]
    pub(crate) fn upper(&self) -> usize {
        self.upper
    }

    #[inline]
    fn width(&self) -> usize {
        self.lower + self.upper + 1
    }

    /// True if `(row, col)` lies inside the matrix and the envelope.
    #[inline]
    pub(crate) fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && col <= row + self.upper && row <= col + self.lower
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col)
            .then(|| row * self.width() + (col + self.lower - row))
    }

    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> Option<&T> {
        let k = self.offset(row, col)?;
        Some(&self.data[k])
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        let k = self.offset(row, col)?;
        Some(&mut self.data[k])
    }

    /// Column range `[first, last]` of the envelope in `row`.
    #[inline]
    pub(crate) fn row_span(&self, row: usize) -> (usize, usize) {
        band_span(self.size, row, self.lower, self.upper)
    }

    /// Every in-envelope position in row-major order.
    pub(crate) fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |row| {
            let (first, last) = self.row_span(row);
            (first..=last).map(move |col| (row, col))
        })
    }
}

/// Inclusive column range `[i - lower, i + upper]` clipped to `[0, size)`.
#[inline]
pub(crate) fn band_span(size: usize, row: usize, lower: usize, upper: usize) -> (usize, usize) {
    (row.saturating_sub(lower), (row + upper).min(size - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bandwidths() {
        assert!(check_bandwidths(3, 2, 0).is_ok());
        assert_eq!(
            check_bandwidths(3, 5, 5),
            Err(MatrixError::Bandwidth {
                lower: 5,
                upper: 5,
                size: 3
            })
        );
        assert!(check_bandwidths(3, 0, 3).is_err());
        assert!(check_bandwidths(0, 0, 0).is_err());
    }

    #[test]
    fn test_envelope_membership() {
        let s = BandStorage::new(4, 1, 2, 0i32);
        assert!(s.contains(0, 0));
        assert!(s.contains(0, 2));
        assert!(!s.contains(0, 3));
        assert!(s.contains(2, 1));
        assert!(!s.contains(2, 0));
        assert!(!s.contains(4, 4));
    }

    #[test]
    fn test_slots_are_distinct() {
        let mut s = BandStorage::new(5, 2, 1, 0usize);
        let positions: Vec<_> = s.positions().collect();
        for (k, &(i, j)) in positions.iter().enumerate() {
            *s.get_mut(i, j).unwrap() = k + 1;
        }
        for (k, &(i, j)) in positions.iter().enumerate() {
            assert_eq!(*s.get(i, j).unwrap(), k + 1);
        }
        // 5 rows, 4 slots each, minus the clipped corners (2 + 1 on top, 1 on bottom).
        assert_eq!(positions.len(), 5 * 4 - 3 - 1);
    }

    #[test]
    fn test_row_span_clips_to_matrix() {
        let s = BandStorage::new(4, 1, 1, 0.0f64);
        assert_eq!(s.row_span(0), (0, 1));
        assert_eq!(s.row_span(2), (1, 3));
        assert_eq!(s.row_span(3), (2, 3));
    }
}

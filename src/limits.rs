//! Size limits injected into every constructor.

use crate::{MatrixError, Result, MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};

const VECTOR_SIZE_VAR: &str = "TMATRIX_MAX_VECTOR_SIZE";
const MATRIX_SIZE_VAR: &str = "TMATRIX_MAX_MATRIX_SIZE";

/// Upper bounds applied when constructing containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Longest permitted [`DynamicVector`](crate::DynamicVector).
    pub max_vector_size: usize,
    /// Largest permitted row or column count for any matrix type.
    pub max_matrix_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_vector_size: MAX_VECTOR_SIZE,
            max_matrix_size: MAX_MATRIX_SIZE,
        }
    }
}

impl Limits {
    /// Create limits with explicit bounds.
    pub fn new(max_vector_size: usize, max_matrix_size: usize) -> Self {
        Self {
            max_vector_size,
            max_matrix_size,
        }
    }

    /// Default limits, overridden by `TMATRIX_MAX_VECTOR_SIZE` and
    /// `TMATRIX_MAX_MATRIX_SIZE` when those are set to valid integers.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_vector_size: read_env(VECTOR_SIZE_VAR).unwrap_or(defaults.max_vector_size),
            max_matrix_size: read_env(MATRIX_SIZE_VAR).unwrap_or(defaults.max_matrix_size),
        }
    }

    pub(crate) fn check_vector(&self, size: usize) -> Result<()> {
        if size > self.max_vector_size {
            return Err(MatrixError::Size {
                size,
                max: self.max_vector_size,
            });
        }
        Ok(())
    }

    pub(crate) fn check_square(&self, size: usize) -> Result<()> {
        if size > self.max_matrix_size {
            return Err(MatrixError::Size {
                size,
                max: self.max_matrix_size,
            });
        }
        Ok(())
    }

    /// Sparse shapes must be non-empty in both directions.
    pub(crate) fn check_shape(&self, rows: usize, cols: usize) -> Result<()> {
        let max = self.max_matrix_size;
        if rows == 0 || cols == 0 || rows > max || cols > max {
            return Err(MatrixError::Dimension { rows, cols, max });
        }
        Ok(())
    }
}

fn read_env(var: &str) -> Option<usize> {
    let raw = std::env::var(var).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {var}={raw:?}: not an unsigned integer");
            None
        }
    }
}

//! Generic linear-algebra containers.
//!
//! This crate provides a resizable vector, a dense square matrix, a family of
//! banded square matrices and a compressed-sparse-row matrix. All containers
//! are generic over an element type implementing [`Scalar`] and have value
//! semantics: cloning or assigning always deep-copies the backing storage.
//!
//! # Core Types
//!
//! - [`DynamicVector`]: bounds-checked 1-D container with elementwise arithmetic
//! - [`DynamicMatrix`]: square matrix built from [`DynamicVector`] rows
//! - [`BandMatrix`]: banded storage parameterized by a [`BandDomain`] policy, with the
//!   aliases [`GeneralBandMatrix`], [`SymmetricBandMatrix`] and [`TriangleBandMatrix`]
//! - [`CsrMatrix`]: sparse matrix storing only non-zero entries
//!
//! # Example
//!
//! ```rust
//! use tmatrix::{DynamicMatrix, GeneralBandMatrix};
//!
//! let mut a = GeneralBandMatrix::<i64>::new(3, 1, 1).unwrap();
//! a.set(0, 0, 2).unwrap();
//! a.set(1, 0, 4).unwrap();
//!
//! // Outside the envelope: reads are structural zeros, writes are rejected.
//! assert_eq!(a.get(0, 2).unwrap(), 0);
//! assert!(a.set(0, 2, 1).is_err());
//!
//! let dense: DynamicMatrix<i64> = a.to_dense();
//! assert_eq!(dense[1][0], 4);
//! ```
//!
//! # Limits
//!
//! Sizes are validated against a [`Limits`] value. The plain constructors use
//! [`Limits::default`], built from [`MAX_VECTOR_SIZE`] and [`MAX_MATRIX_SIZE`];
//! every container also has a `with_limits` constructor.

pub mod band;
mod csr;
mod limits;
mod matrix;
mod vector;

// ============================================================================
// Containers
// ============================================================================
pub use band::{
    BandDomain, BandMatrix, General, GeneralBandMatrix, Symmetric, SymmetricBandMatrix, Triangle,
    TriangleBandMatrix,
};
pub use csr::{CsrMatrix, CsrParts};
pub use matrix::DynamicMatrix;
pub use vector::DynamicVector;

// ============================================================================
// Configuration
// ============================================================================
pub use limits::Limits;

pub use tmatrix_traits::Scalar;

// ============================================================================
// Constants
// ============================================================================

/// Default upper bound on the length of a [`DynamicVector`].
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Default upper bound on the dimension of any matrix type.
pub const MAX_MATRIX_SIZE: usize = 10_000;

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while building or operating on containers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Requested length exceeds the configured maximum.
    #[error("invalid size {size} (maximum {max})")]
    Size { size: usize, max: usize },

    /// Requested matrix shape is empty or exceeds the configured maximum.
    #[error("invalid dimensions {rows}x{cols} (each must be in 1..={max})")]
    Dimension { rows: usize, cols: usize, max: usize },

    /// Index outside `[0, bound)`.
    #[error("index {index} out of range for length {bound}")]
    Index { index: usize, bound: usize },

    /// Bandwidth not strictly smaller than the matrix size.
    #[error("bandwidths (lower {lower}, upper {upper}) must be smaller than size {size}")]
    Bandwidth {
        lower: usize,
        upper: usize,
        size: usize,
    },

    /// Position outside the addressable envelope or triangle of the matrix.
    #[error("position ({row}, {col}) is outside the matrix domain")]
    Domain { row: usize, col: usize },

    /// Operands of a binary operation have different sizes.
    #[error("size mismatch: {0} vs {1}")]
    SizeMismatch(usize, usize),

    /// Operands of a binary operation have incompatible shapes.
    #[error("shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),
}

/// Result type for container operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

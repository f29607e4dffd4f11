//! Shared traits for the tmatrix containers.
//!
//! This crate holds the element-type bound used by every container in
//! `tmatrix` (dense, banded and CSR). Downstream crates can depend on
//! `tmatrix-traits` alone to check that their own number types qualify.

pub mod scalar;

pub use scalar::Scalar;

//! Scalar type bounds for matrix and vector elements.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Trait bounds shared by every element type stored in a tmatrix container.
///
/// `Zero::zero()` is the additive identity: it is what banded matrices
/// return outside their envelope and what a CSR matrix never stores.
/// `One` is only needed for identity construction.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + num_traits::Zero
    + num_traits::One
{
}

impl<T> Scalar for T where
    T: Copy
        + Debug
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + num_traits::Zero
        + num_traits::One
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    fn assert_scalar<T: Scalar>() {}

    #[test]
    fn test_standard_types() {
        assert_scalar::<f32>();
        assert_scalar::<f64>();
        assert_scalar::<i32>();
        assert_scalar::<i64>();
        assert_scalar::<u8>();
        assert_scalar::<num_complex::Complex64>();
    }

    #[test]
    fn test_modular_type() {
        // Integers mod 7: a ring with a non-trivial zero test.
        #[derive(Debug, Clone, Copy, PartialEq)]
        struct Mod7(u8);

        impl Add for Mod7 {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Mod7((self.0 + rhs.0) % 7)
            }
        }

        impl Sub for Mod7 {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Mod7((self.0 + 7 - rhs.0) % 7)
            }
        }

        impl Mul for Mod7 {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                Mod7((self.0 * rhs.0) % 7)
            }
        }

        impl num_traits::Zero for Mod7 {
            fn zero() -> Self {
                Mod7(0)
            }
            fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }

        impl num_traits::One for Mod7 {
            fn one() -> Self {
                Mod7(1)
            }
        }

        assert_scalar::<Mod7>();

        let a = Mod7(5);
        let b = Mod7(4);
        assert_eq!(a + b, Mod7(2));
        assert_eq!(b - a, Mod7(6));
        assert_eq!(a * b, Mod7(6));
        assert!(Mod7::zero().is_zero());
        assert!(!Mod7::one().is_zero());
    }
}

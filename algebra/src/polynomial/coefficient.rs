use std::fmt::Debug;

use num_traits::Zero;

use crate::Torus32;

/// The coefficient of a [`Polynomial`](super::Polynomial).
///
/// Every operation wraps around modulo `2^32`, which is the torus arithmetic
/// for [`Torus32`] and the two's complement arithmetic for `i32`.
pub trait Coefficient: Copy + Debug + Default + PartialEq + Send + Sync + Zero {
    /// Wrapping addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Wrapping subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Wrapping negation.
    fn wrapping_neg(self) -> Self;

    /// Wrapping multiplication by an integer scalar.
    fn wrapping_mul_int(self, p: i32) -> Self;
}

impl Coefficient for i32 {
    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        i32::wrapping_add(self, rhs)
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        i32::wrapping_sub(self, rhs)
    }

    #[inline]
    fn wrapping_neg(self) -> Self {
        i32::wrapping_neg(self)
    }

    #[inline]
    fn wrapping_mul_int(self, p: i32) -> Self {
        i32::wrapping_mul(self, p)
    }
}

impl Coefficient for Torus32 {
    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn wrapping_neg(self) -> Self {
        -self
    }

    #[inline]
    fn wrapping_mul_int(self, p: i32) -> Self {
        self.mul_int(p)
    }
}

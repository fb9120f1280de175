//! Helpers shared by the lattice structures.

use algebra::Torus32;

mod space;

pub use space::*;

/// Performs dot product for a torus slice and an integer slice.
#[inline]
pub fn dot_product(u: &[Torus32], v: &[i32]) -> Torus32 {
    debug_assert_eq!(u.len(), v.len());
    u.iter()
        .zip(v)
        .fold(Torus32::ZERO, |acc, (&x, &y)| acc + x.mul_int(y))
}

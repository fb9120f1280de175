use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// `2^32` as a float, the scale between the real torus and [`Torus32`].
const TWO_POW_32: f64 = 4294967296.0;

/// An element of the real torus `T = R/Z`, discretized to 32 bits.
///
/// The value is stored as a signed 32-bit integer interpreted modulo `2^32`,
/// so `Torus32(x)` stands for `x / 2^32` and every arithmetic operation wraps.
/// The representative range is `[-1/2, 1/2)`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Torus32(i32);

impl Torus32 {
    /// The zero element.
    pub const ZERO: Self = Self(0);

    /// Creates a new [`Torus32`] from its raw 32-bit representation.
    #[inline]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw 32-bit representation.
    #[inline]
    pub const fn inner(self) -> i32 {
        self.0
    }

    /// Returns the representation as an unsigned 32-bit integer.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        self.0 as u32
    }

    /// Creates a [`Torus32`] from an unsigned 32-bit representation.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits as i32)
    }

    /// Maps a real number onto the torus, `round(frac(x) * 2^32)`.
    #[inline]
    pub fn from_f64(x: f64) -> Self {
        let frac = x - x.trunc();
        Self((frac * TWO_POW_32).round() as i64 as i32)
    }

    /// Maps the torus element to a real number in `[-1/2, 1/2)`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / TWO_POW_32
    }

    /// Returns the distance on the torus between `self` and `other`, in `[0, 1/2]`.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).to_f64().abs()
    }

    /// Multiplies by the integer `p` with wrap-around.
    #[inline]
    pub const fn mul_int(self, p: i32) -> Self {
        Self(self.0.wrapping_mul(p))
    }
}

impl fmt::Debug for Torus32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Torus32({} ~ {:.6})", self.0, self.to_f64())
    }
}

impl fmt::Display for Torus32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

impl From<i32> for Torus32 {
    #[inline]
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Torus32> for i32 {
    #[inline]
    fn from(value: Torus32) -> Self {
        value.0
    }
}

impl Add for Torus32 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Torus32 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for Torus32 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.wrapping_neg())
    }
}

impl Mul<i32> for Torus32 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i32) -> Self::Output {
        self.mul_int(rhs)
    }
}

impl AddAssign for Torus32 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl SubAssign for Torus32 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_sub(rhs.0);
    }
}

impl MulAssign<i32> for Torus32 {
    #[inline]
    fn mul_assign(&mut self, rhs: i32) {
        self.0 = self.0.wrapping_mul(rhs);
    }
}

impl Sum for Torus32 {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Zero for Torus32 {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Distribution<Torus32> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Torus32 {
        Torus32(rng.next_u32() as i32)
    }
}

/// Width of one of the `msize` equal intervals of the torus, scaled by `2^64`.
#[inline]
fn interval(msize: usize) -> u64 {
    assert!(msize >= 2, "message space size must be at least 2");
    ((1u64 << 63) / msize as u64) * 2
}

/// Maps `mu` of a message space of size `msize` to the torus, `mu / msize`.
///
/// # Panics
///
/// Panics if `msize < 2`.
#[inline]
pub fn mod_switch_to_torus(mu: i32, msize: usize) -> Torus32 {
    let phase64 = (mu as i64 as u64).wrapping_mul(interval(msize));
    Torus32((phase64 >> 32) as u32 as i32)
}

/// Rounds `phase` to the closest `mu / msize` and returns `mu` in `[0, msize)`.
///
/// # Panics
///
/// Panics if `msize < 2`.
#[inline]
pub fn mod_switch_from_torus(phase: Torus32, msize: usize) -> usize {
    let interv = interval(msize);
    let phase64 = ((phase.to_bits() as u64) << 32).wrapping_add(interv >> 1);
    (phase64 / interv) as usize
}

/// Rounds `phase` to the closest multiple of `1 / msize` on the torus.
///
/// # Panics
///
/// Panics if `msize < 2`.
#[inline]
pub fn approx_phase(phase: Torus32, msize: usize) -> Torus32 {
    let interv = interval(msize);
    let mut phase64 = ((phase.to_bits() as u64) << 32).wrapping_add(interv >> 1);
    phase64 -= phase64 % interv;
    Torus32((phase64 >> 32) as u32 as i32)
}

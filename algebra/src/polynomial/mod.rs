//! Polynomials over the quotient ring `Z[X]/(X^N + 1)` and `T[X]/(X^N + 1)`.

use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use serde::{Deserialize, Serialize};

use crate::Torus32;

mod coefficient;
mod monomial;
mod mul;
mod ops;

pub use coefficient::Coefficient;
pub use mul::naive_mul;

/// A polynomial with integer coefficients modulo `X^N + 1`.
pub type IntPolynomial = Polynomial<i32>;

/// A polynomial with torus coefficients modulo `X^N + 1`.
pub type TorusPolynomial = Polynomial<Torus32>;

/// Represents a polynomial modulo `X^N + 1` whose coefficients are of type `T`.
///
/// The coefficients are stored in a vector `data`, with the `i`-th element
/// representing the coefficient of the `xⁱ` term. The coefficient count `N`
/// is the degree bound of the quotient ring, it is a power of two in practice.
///
/// All binary operations require both operands to carry the same coefficient
/// count and panic otherwise.
///
/// # Examples
/// ```
/// use algebra::{IntPolynomial, Torus32, TorusPolynomial};
///
/// let p = IntPolynomial::new(vec![1, 0, 0, 2]);
/// let q = TorusPolynomial::zero(4);
/// assert_eq!(p.coeff_count(), q.coeff_count());
/// assert_eq!(q[3], Torus32::ZERO);
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polynomial<T> {
    data: Vec<T>,
}

impl<T> Polynomial<T> {
    /// Creates a new [`Polynomial<T>`].
    #[inline]
    pub fn new(polynomial: Vec<T>) -> Self {
        Self { data: polynomial }
    }

    /// Extracts a slice containing the entire vector.
    ///
    /// Equivalent to `&s[..]`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Extracts a mutable slice of the entire vector.
    ///
    /// Equivalent to `&mut s[..]`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    /// Drop self, and return the data.
    #[inline]
    pub fn inner_data(self) -> Vec<T> {
        self.data
    }

    /// Get the coefficient counts of polynomial.
    #[inline]
    pub fn coeff_count(&self) -> usize {
        self.data.len()
    }

    /// Returns an iterator that allows reading each value or coefficient of the polynomial.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        self.data.iter()
    }

    /// Returns an iterator that allows modifying each value or coefficient of the polynomial.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        self.data.iter_mut()
    }
}

impl<T: Copy> Polynomial<T> {
    /// Constructs a new polynomial from a slice.
    #[inline]
    pub fn from_slice(polynomial: &[T]) -> Self {
        Self::new(polynomial.to_vec())
    }

    /// Copy the coefficients from another polynomial.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ.
    #[inline]
    pub fn copy_from(&mut self, src: &Self) {
        assert_eq!(self.coeff_count(), src.coeff_count(), "degree mismatch");
        self.data.copy_from_slice(&src.data)
    }

    /// Returns an iterator that allows reading each value or coefficient of the polynomial.
    #[inline]
    pub fn copied_iter(&self) -> std::iter::Copied<Iter<'_, T>> {
        self.data.iter().copied()
    }
}

impl<T: Coefficient> Polynomial<T> {
    /// Creates a [`Polynomial<T>`] with all coefficients equal to zero.
    #[inline]
    pub fn zero(coeff_count: usize) -> Self {
        Self {
            data: vec![T::zero(); coeff_count],
        }
    }

    /// Returns `true` if every coefficient is `0`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(T::is_zero)
    }

    /// Sets `self` to `0`.
    #[inline]
    pub fn set_zero(&mut self) {
        self.data.fill(T::zero());
    }

    /// Creates the constant polynomial whose every coefficient equals `value`.
    #[inline]
    pub fn constant_coefficients(coeff_count: usize, value: T) -> Self {
        Self {
            data: vec![value; coeff_count],
        }
    }
}

impl IntPolynomial {
    /// Returns the squared euclidean norm of this polynomial.
    #[inline]
    pub fn norm_sq2(&self) -> f64 {
        self.iter().map(|&c| (c as f64) * (c as f64)).sum()
    }

    /// Returns the largest absolute value of the coefficients.
    #[inline]
    pub fn norm_inf(&self) -> u32 {
        self.iter().map(|c| c.unsigned_abs()).max().unwrap_or(0)
    }
}

impl TorusPolynomial {
    /// Returns the squared euclidean norm, each coefficient taken in `[-1/2, 1/2)`.
    #[inline]
    pub fn norm_sq2(&self) -> f64 {
        self.iter().map(|c| c.to_f64() * c.to_f64()).sum()
    }

    /// Returns the largest torus distance between matching coefficients.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ.
    pub fn norm_inf_distance(&self, other: &Self) -> f64 {
        assert_eq!(self.coeff_count(), other.coeff_count(), "degree mismatch");
        self.iter()
            .zip(other.iter())
            .map(|(&a, &b)| a.distance(b))
            .fold(0.0, f64::max)
    }
}

impl<T> AsRef<[T]> for Polynomial<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<T> AsMut<[T]> for Polynomial<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }
}

impl<T> Index<usize> for Polynomial<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Polynomial<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T> IntoIterator for Polynomial<T> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> FromIterator<T> for Polynomial<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

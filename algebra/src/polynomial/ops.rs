use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::{Coefficient, Polynomial};

impl<T: Coefficient> Polynomial<T> {
    /// Performs `self += rhs` in place.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ.
    #[inline]
    pub fn add_assign_element_wise(&mut self, rhs: &Self) {
        assert_eq!(self.coeff_count(), rhs.coeff_count(), "degree mismatch");
        self.iter_mut()
            .zip(rhs.iter())
            .for_each(|(a, &b)| *a = a.wrapping_add(b));
    }

    /// Performs `self -= rhs` in place.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ.
    #[inline]
    pub fn sub_assign_element_wise(&mut self, rhs: &Self) {
        assert_eq!(self.coeff_count(), rhs.coeff_count(), "degree mismatch");
        self.iter_mut()
            .zip(rhs.iter())
            .for_each(|(a, &b)| *a = a.wrapping_sub(b));
    }

    /// Performs `self = -self` in place.
    #[inline]
    pub fn neg_assign(&mut self) {
        self.iter_mut().for_each(|a| *a = a.wrapping_neg());
    }

    /// Performs `self *= p` in place for an integer scalar `p`.
    #[inline]
    pub fn mul_scalar_assign(&mut self, p: i32) {
        self.iter_mut().for_each(|a| *a = a.wrapping_mul_int(p));
    }

    /// Performs `self += p * rhs` in place for an integer scalar `p`.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ.
    #[inline]
    pub fn add_mul_scalar_assign(&mut self, p: i32, rhs: &Self) {
        assert_eq!(self.coeff_count(), rhs.coeff_count(), "degree mismatch");
        self.iter_mut()
            .zip(rhs.iter())
            .for_each(|(a, &b)| *a = a.wrapping_add(b.wrapping_mul_int(p)));
    }

    /// Performs `self -= p * rhs` in place for an integer scalar `p`.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ.
    #[inline]
    pub fn sub_mul_scalar_assign(&mut self, p: i32, rhs: &Self) {
        assert_eq!(self.coeff_count(), rhs.coeff_count(), "degree mismatch");
        self.iter_mut()
            .zip(rhs.iter())
            .for_each(|(a, &b)| *a = a.wrapping_sub(b.wrapping_mul_int(p)));
    }
}

impl<T: Coefficient> AddAssign<&Self> for Polynomial<T> {
    #[inline]
    fn add_assign(&mut self, rhs: &Self) {
        self.add_assign_element_wise(rhs);
    }
}

impl<T: Coefficient> AddAssign for Polynomial<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign_element_wise(&rhs);
    }
}

impl<T: Coefficient> SubAssign<&Self> for Polynomial<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: &Self) {
        self.sub_assign_element_wise(rhs);
    }
}

impl<T: Coefficient> SubAssign for Polynomial<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign_element_wise(&rhs);
    }
}

impl<T: Coefficient> Add<&Polynomial<T>> for Polynomial<T> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: &Self) -> Self::Output {
        self.add_assign_element_wise(rhs);
        self
    }
}

impl<T: Coefficient> Add for Polynomial<T> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        self.add_assign_element_wise(&rhs);
        self
    }
}

impl<T: Coefficient> Add<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    #[inline]
    fn add(self, rhs: &Polynomial<T>) -> Self::Output {
        assert_eq!(self.coeff_count(), rhs.coeff_count(), "degree mismatch");
        self.iter()
            .zip(rhs.iter())
            .map(|(&a, &b)| a.wrapping_add(b))
            .collect()
    }
}

impl<T: Coefficient> Sub<&Polynomial<T>> for Polynomial<T> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: &Self) -> Self::Output {
        self.sub_assign_element_wise(rhs);
        self
    }
}

impl<T: Coefficient> Sub for Polynomial<T> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self.sub_assign_element_wise(&rhs);
        self
    }
}

impl<T: Coefficient> Sub<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    #[inline]
    fn sub(self, rhs: &Polynomial<T>) -> Self::Output {
        assert_eq!(self.coeff_count(), rhs.coeff_count(), "degree mismatch");
        self.iter()
            .zip(rhs.iter())
            .map(|(&a, &b)| a.wrapping_sub(b))
            .collect()
    }
}

impl<T: Coefficient> Neg for Polynomial<T> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.neg_assign();
        self
    }
}

impl<T: Coefficient> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.iter().map(|&a| a.wrapping_neg()).collect()
    }
}

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use algebra::Torus32;

use super::Lwe;

impl Lwe {
    /// Performs `self += rhs` component-wise, the noise variances add up.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[inline]
    pub fn add_assign_component_wise(&mut self, rhs: &Self) {
        assert_eq!(self.dimension(), rhs.dimension(), "dimension mismatch");
        self.data
            .iter_mut()
            .zip(rhs.data.iter())
            .for_each(|(v, &r)| *v += r);
        self.variance += rhs.variance;
    }

    /// Performs `self -= rhs` component-wise, the noise variances add up.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[inline]
    pub fn sub_assign_component_wise(&mut self, rhs: &Self) {
        assert_eq!(self.dimension(), rhs.dimension(), "dimension mismatch");
        self.data
            .iter_mut()
            .zip(rhs.data.iter())
            .for_each(|(v, &r)| *v -= r);
        self.variance += rhs.variance;
    }

    /// Performs `self += p * rhs`.
    ///
    /// The variance of `rhs` is scaled by `p^2`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[inline]
    pub fn add_mul_assign(&mut self, p: i32, rhs: &Self) {
        assert_eq!(self.dimension(), rhs.dimension(), "dimension mismatch");
        self.data
            .iter_mut()
            .zip(rhs.data.iter())
            .for_each(|(v, &r)| *v += r.mul_int(p));
        self.variance += square(p) * rhs.variance;
    }

    /// Performs `self -= p * rhs`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[inline]
    pub fn sub_mul_assign(&mut self, p: i32, rhs: &Self) {
        assert_eq!(self.dimension(), rhs.dimension(), "dimension mismatch");
        self.data
            .iter_mut()
            .zip(rhs.data.iter())
            .for_each(|(v, &r)| *v -= r.mul_int(p));
        self.variance += square(p) * rhs.variance;
    }

    /// Performs `self *= p`.
    #[inline]
    pub fn mul_scalar_assign(&mut self, p: i32) {
        self.data.iter_mut().for_each(|v| *v *= p);
        self.variance *= square(p);
    }

    /// Performs `self = -self`, the variance is unchanged.
    #[inline]
    pub fn neg_assign(&mut self) {
        self.data.iter_mut().for_each(|v| *v = -*v);
    }

    /// Adds the noiseless constant `mu` to the message, only `b` changes.
    #[inline]
    pub fn add_constant_assign(&mut self, mu: Torus32) {
        *self.b_mut() += mu;
    }

    /// Subtracts the noiseless constant `mu` from the message, only `b` changes.
    #[inline]
    pub fn sub_constant_assign(&mut self, mu: Torus32) {
        *self.b_mut() -= mu;
    }

    /// Returns `self + rhs`.
    #[inline]
    pub fn add_component_wise_ref(&self, rhs: &Self) -> Self {
        let mut result = self.clone();
        result.add_assign_component_wise(rhs);
        result
    }

    /// Returns `self - rhs`.
    #[inline]
    pub fn sub_component_wise_ref(&self, rhs: &Self) -> Self {
        let mut result = self.clone();
        result.sub_assign_component_wise(rhs);
        result
    }
}

#[inline]
fn square(p: i32) -> f64 {
    let p = p as f64;
    p * p
}

impl AddAssign<&Lwe> for Lwe {
    #[inline]
    fn add_assign(&mut self, rhs: &Lwe) {
        self.add_assign_component_wise(rhs);
    }
}

impl SubAssign<&Lwe> for Lwe {
    #[inline]
    fn sub_assign(&mut self, rhs: &Lwe) {
        self.sub_assign_component_wise(rhs);
    }
}

impl Add<&Lwe> for Lwe {
    type Output = Lwe;

    #[inline]
    fn add(mut self, rhs: &Lwe) -> Self::Output {
        self.add_assign_component_wise(rhs);
        self
    }
}

impl Add<&Lwe> for &Lwe {
    type Output = Lwe;

    #[inline]
    fn add(self, rhs: &Lwe) -> Self::Output {
        self.add_component_wise_ref(rhs)
    }
}

impl Sub<&Lwe> for Lwe {
    type Output = Lwe;

    #[inline]
    fn sub(mut self, rhs: &Lwe) -> Self::Output {
        self.sub_assign_component_wise(rhs);
        self
    }
}

impl Sub<&Lwe> for &Lwe {
    type Output = Lwe;

    #[inline]
    fn sub(self, rhs: &Lwe) -> Self::Output {
        self.sub_component_wise_ref(rhs)
    }
}

impl Neg for Lwe {
    type Output = Lwe;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.neg_assign();
        self
    }
}

impl Neg for &Lwe {
    type Output = Lwe;

    #[inline]
    fn neg(self) -> Self::Output {
        let mut result = self.clone();
        result.neg_assign();
        result
    }
}

use algebra::{utils::Size, Torus32, TorusPolynomial};
use serde::{Deserialize, Serialize};

mod encrypt;
mod extract;
mod fourier;
mod ops;

pub use extract::extract_lwe_key;
pub use fourier::FourierTlwe;

/// A [`Tlwe`] sample is the ring version of [`Lwe`](crate::Lwe) over `T[X]/(X^N + 1)`.
///
/// It is made of `k + 1` torus polynomials `a_0, ..., a_{k-1}, b` such that
/// `b - Σ a_i * s_i = μ + e`, where `s_0, ..., s_{k-1}` are binary integer
/// polynomials and `e` is a polynomial with gaussian coefficients. `k` is the
/// module rank.
///
/// `variance` estimates the variance of every coefficient of `e`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tlwe {
    /// `a_0, ..., a_{k-1}` followed by `b`.
    polys: Vec<TorusPolynomial>,
    /// The estimated variance of the noise.
    variance: f64,
}

impl Tlwe {
    /// Creates a new [`Tlwe`] from its `k + 1` polynomials, `b` being the last one.
    ///
    /// # Panics
    ///
    /// Panics if there is no `a` part or if the degrees differ.
    #[inline]
    pub fn new(polys: Vec<TorusPolynomial>, variance: f64) -> Self {
        assert!(polys.len() >= 2, "a tlwe sample needs at least one mask polynomial");
        let n = polys[0].coeff_count();
        assert!(
            polys.iter().all(|p| p.coeff_count() == n),
            "degree mismatch"
        );
        Self { polys, variance }
    }

    /// Generates a [`Tlwe`] of module rank `module_rank` with all polynomials `0`.
    #[inline]
    pub fn zero(module_rank: usize, coeff_count: usize) -> Self {
        Self {
            polys: vec![TorusPolynomial::zero(coeff_count); module_rank + 1],
            variance: 0.,
        }
    }

    /// Generates the noiseless trivial [`Tlwe`] `(0, ..., 0, mu)`.
    #[inline]
    pub fn noiseless_trivial(module_rank: usize, mu: &TorusPolynomial) -> Self {
        let mut result = Self::zero(module_rank, mu.coeff_count());
        result.b_mut().copy_from(mu);
        result
    }

    /// Generates the noiseless trivial [`Tlwe`] whose message is the constant `mu`.
    #[inline]
    pub fn noiseless_trivial_t(module_rank: usize, coeff_count: usize, mu: Torus32) -> Self {
        let mut result = Self::zero(module_rank, coeff_count);
        result.b_mut()[0] = mu;
        result
    }

    /// Returns the module rank `k`.
    #[inline]
    pub fn module_rank(&self) -> usize {
        self.polys.len() - 1
    }

    /// Returns the polynomial dimension `N`.
    #[inline]
    pub fn coeff_count(&self) -> usize {
        self.polys[0].coeff_count()
    }

    /// Returns a reference to the `i`-th mask polynomial `a_i`.
    #[inline]
    pub fn a(&self, i: usize) -> &TorusPolynomial {
        assert!(i < self.module_rank(), "mask index out of range");
        &self.polys[i]
    }

    /// Returns a mutable reference to the `i`-th mask polynomial `a_i`.
    #[inline]
    pub fn a_mut(&mut self, i: usize) -> &mut TorusPolynomial {
        assert!(i < self.module_rank(), "mask index out of range");
        &mut self.polys[i]
    }

    /// Returns a reference to the `b` of this [`Tlwe`].
    #[inline]
    pub fn b(&self) -> &TorusPolynomial {
        &self.polys[self.polys.len() - 1]
    }

    /// Returns a mutable reference to the `b` of this [`Tlwe`].
    #[inline]
    pub fn b_mut(&mut self) -> &mut TorusPolynomial {
        let k = self.module_rank();
        &mut self.polys[k]
    }

    /// Returns all the `k + 1` polynomials, `b` being the last one.
    #[inline]
    pub fn polys(&self) -> &[TorusPolynomial] {
        &self.polys
    }

    /// Returns all the `k + 1` polynomials mutably, `b` being the last one.
    #[inline]
    pub fn polys_mut(&mut self) -> &mut [TorusPolynomial] {
        &mut self.polys
    }

    /// Returns the estimated noise variance of this [`Tlwe`].
    #[inline]
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Sets the estimated noise variance of this [`Tlwe`].
    #[inline]
    pub fn set_variance(&mut self, variance: f64) {
        self.variance = variance;
    }

    /// Sets all polynomials to `0`.
    #[inline]
    pub fn set_zero(&mut self) {
        self.polys.iter_mut().for_each(TorusPolynomial::set_zero);
        self.variance = 0.;
    }

    /// Copy the values from another [`Tlwe`].
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    #[inline]
    pub fn copy_from(&mut self, src: &Self) {
        assert_eq!(self.module_rank(), src.module_rank(), "module rank mismatch");
        self.polys
            .iter_mut()
            .zip(src.polys.iter())
            .for_each(|(d, s)| d.copy_from(s));
        self.variance = src.variance;
    }

    #[inline]
    fn check_shape(&self, rhs: &Self) {
        assert_eq!(self.module_rank(), rhs.module_rank(), "module rank mismatch");
        assert_eq!(self.coeff_count(), rhs.coeff_count(), "degree mismatch");
    }
}

impl Size for Tlwe {
    #[inline]
    fn size(&self) -> usize {
        self.polys.size()
    }
}

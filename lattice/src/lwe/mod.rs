use algebra::{utils::Size, Torus32};
use serde::{Deserialize, Serialize};

mod encrypt;
mod ops;

/// Represents a cryptographic structure based on the Learning with Errors (LWE) problem.
///
/// An [`Lwe`] sample of dimension `n` is a pair `(a, b)` with `a` in `T^n` and
/// `b` in `T` such that `b - <a, s> = μ + e`, where `s` is a binary secret key
/// and `e` is a gaussian noise. The `n + 1` torus values are stored in one
/// vector, `b` being the last one.
///
/// `variance` is an analytic estimate of the variance of `e`, it is updated
/// by every operation but never checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lwe {
    /// `a` followed by `b`.
    data: Vec<Torus32>,
    /// The estimated variance of the noise.
    variance: f64,
}

impl Lwe {
    /// Creates a new [`Lwe`] from its parts.
    #[inline]
    pub fn new(mut a: Vec<Torus32>, b: Torus32, variance: f64) -> Self {
        a.push(b);
        Self { data: a, variance }
    }

    /// Generates a [`Lwe`] with all values are `0`.
    #[inline]
    pub fn zero(dimension: usize) -> Self {
        Self {
            data: vec![Torus32::ZERO; dimension + 1],
            variance: 0.,
        }
    }

    /// Generates the noiseless trivial [`Lwe`] `(0, mu)`.
    #[inline]
    pub fn noiseless_trivial(dimension: usize, mu: Torus32) -> Self {
        let mut result = Self::zero(dimension);
        *result.b_mut() = mu;
        result
    }

    /// Returns the dimension `n` of this [`Lwe`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.len() - 1
    }

    /// Returns a reference to the `a` of this [`Lwe`].
    #[inline]
    pub fn a(&self) -> &[Torus32] {
        let n = self.dimension();
        &self.data[..n]
    }

    /// Returns a mutable reference to the `a` of this [`Lwe`].
    #[inline]
    pub fn a_mut(&mut self) -> &mut [Torus32] {
        let n = self.dimension();
        &mut self.data[..n]
    }

    /// Returns the `b` of this [`Lwe`].
    #[inline]
    pub fn b(&self) -> Torus32 {
        self.data[self.data.len() - 1]
    }

    /// Returns a mutable reference to the `b` of this [`Lwe`].
    #[inline]
    pub fn b_mut(&mut self) -> &mut Torus32 {
        let n = self.dimension();
        &mut self.data[n]
    }

    /// Returns the `a` and a mutable reference to the `b` at the same time.
    #[inline]
    pub fn a_mut_b_mut(&mut self) -> (&mut [Torus32], &mut Torus32) {
        let n = self.dimension();
        let (a, b) = self.data.split_at_mut(n);
        (a, &mut b[0])
    }

    /// Returns all the `n + 1` values, `b` being the last one.
    #[inline]
    pub fn as_slice(&self) -> &[Torus32] {
        &self.data
    }

    /// Returns the estimated noise variance of this [`Lwe`].
    #[inline]
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Sets the estimated noise variance of this [`Lwe`].
    #[inline]
    pub fn set_variance(&mut self, variance: f64) {
        self.variance = variance;
    }

    /// Sets all values to `0`.
    #[inline]
    pub fn set_zero(&mut self) {
        self.data.fill(Torus32::ZERO);
        self.variance = 0.;
    }

    /// Copy the values from another [`Lwe`].
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[inline]
    pub fn copy_from(&mut self, src: &Self) {
        assert_eq!(self.dimension(), src.dimension(), "dimension mismatch");
        self.data.copy_from_slice(&src.data);
        self.variance = src.variance;
    }
}

impl Size for Lwe {
    #[inline]
    fn size(&self) -> usize {
        self.data.len() * std::mem::size_of::<Torus32>()
    }
}

#[cfg(test)]
mod tests {
    use algebra::Torus32;

    use super::Lwe;

    #[test]
    fn test_layout() {
        let mut c = Lwe::new(vec![Torus32::new(1), Torus32::new(2)], Torus32::new(3), 0.5);
        assert_eq!(c.dimension(), 2);
        assert_eq!(c.a(), &[Torus32::new(1), Torus32::new(2)]);
        assert_eq!(c.b(), Torus32::new(3));
        assert_eq!(c.as_slice().len(), 3);

        *c.b_mut() = Torus32::new(9);
        c.a_mut()[0] = Torus32::new(7);
        assert_eq!(c.as_slice(), &[Torus32::new(7), Torus32::new(2), Torus32::new(9)]);

        let t = Lwe::noiseless_trivial(4, Torus32::new(1 << 29));
        assert!(t.a().iter().all(|&x| x == Torus32::ZERO));
        assert_eq!(t.b(), Torus32::new(1 << 29));
        assert_eq!(t.variance(), 0.);

        c.set_zero();
        assert_eq!(c, Lwe::zero(2));
    }
}

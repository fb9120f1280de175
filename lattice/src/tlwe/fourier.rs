use algebra::{utils::Size, FftProcessor, FourierPolynomial};

use super::Tlwe;

/// A [`Tlwe`] sample whose polynomials are held in the frequency domain.
///
/// It is only meaningful for the [`FftProcessor`] that produced it. The noise
/// variance is not tracked here, it travels with the coefficient domain samples.
#[derive(Debug, Clone, PartialEq)]
pub struct FourierTlwe {
    polys: Vec<FourierPolynomial>,
}

impl FourierTlwe {
    /// Generates a [`FourierTlwe`] of module rank `module_rank` with all polynomials `0`.
    #[inline]
    pub fn zero(module_rank: usize, coeff_count: usize) -> Self {
        Self {
            polys: vec![FourierPolynomial::zero(coeff_count); module_rank + 1],
        }
    }

    /// Transforms a [`Tlwe`] into the frequency domain.
    pub fn from_tlwe(tlwe: &Tlwe, fft: &FftProcessor) -> Self {
        Self {
            polys: tlwe.polys().iter().map(|p| fft.transform_torus(p)).collect(),
        }
    }

    /// Transforms `self` back into `destination`.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn inverse_into(&self, destination: &mut Tlwe, fft: &FftProcessor) {
        assert_eq!(
            self.module_rank(),
            destination.module_rank(),
            "module rank mismatch"
        );
        self.polys
            .iter()
            .zip(destination.polys_mut())
            .for_each(|(s, d)| fft.inverse_torus(s, d));
    }

    /// Transforms `self` back into `destination`, consuming `self` as scratch.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn inverse_into_inplace(&mut self, destination: &mut Tlwe, fft: &FftProcessor) {
        assert_eq!(
            self.module_rank(),
            destination.module_rank(),
            "module rank mismatch"
        );
        self.polys
            .iter_mut()
            .zip(destination.polys_mut())
            .for_each(|(s, d)| fft.inverse_torus_inplace(s, d));
    }

    /// Returns the module rank `k`.
    #[inline]
    pub fn module_rank(&self) -> usize {
        self.polys.len() - 1
    }

    /// Returns the `k + 1` frequency domain polynomials.
    #[inline]
    pub fn polys(&self) -> &[FourierPolynomial] {
        &self.polys
    }

    /// Returns the `k + 1` frequency domain polynomials mutably.
    #[inline]
    pub fn polys_mut(&mut self) -> &mut [FourierPolynomial] {
        &mut self.polys
    }

    /// Sets all polynomials to `0`.
    #[inline]
    pub fn set_zero(&mut self) {
        self.polys.iter_mut().for_each(FourierPolynomial::set_zero);
    }

    /// Performs `self += scalar * rhs` pointwise, `scalar` being one frequency domain polynomial.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    #[inline]
    pub fn add_mul_assign(&mut self, scalar: &FourierPolynomial, rhs: &Self) {
        assert_eq!(self.module_rank(), rhs.module_rank(), "module rank mismatch");
        self.polys
            .iter_mut()
            .zip(rhs.polys.iter())
            .for_each(|(d, r)| d.add_mul_assign(scalar, r));
    }
}

impl Size for FourierTlwe {
    #[inline]
    fn size(&self) -> usize {
        self.polys.size()
    }
}

#[cfg(test)]
mod tests {
    use algebra::{FftProcessor, Torus32};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha12Rng;

    use crate::{FourierTlwe, Tlwe};

    #[test]
    fn test_round_trip() {
        let mut rng = ChaCha12Rng::seed_from_u64(16);
        let n = 128;
        let fft = FftProcessor::new(n).unwrap();
        let polys = (0..3)
            .map(|_| (0..n).map(|_| rng.gen::<Torus32>()).collect())
            .collect();
        let x = Tlwe::new(polys, 0.);

        let mut f = FourierTlwe::from_tlwe(&x, &fft);
        assert_eq!(f.module_rank(), 2);

        let mut y = Tlwe::zero(2, n);
        f.inverse_into(&mut y, &fft);
        assert_eq!(y, x);

        y.set_zero();
        f.inverse_into_inplace(&mut y, &fft);
        assert_eq!(y, x);
    }
}

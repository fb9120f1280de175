use algebra::{
    approx_phase,
    random::{gaussian_t32, sample_uniform_torus_values},
    FftProcessor, IntPolynomial, Torus32, TorusPolynomial,
};
use rand::{CryptoRng, Rng};

use super::Tlwe;

impl Tlwe {
    /// Generates a [`Tlwe`] sample encrypting `0` under `key`.
    ///
    /// Every `a_i` is uniform and `b = Σ a_i * s_i + e`, the coefficients of `e`
    /// following `N(0, std_dev^2)`. The module rank is `key.len()`.
    pub fn encrypt_zero<R>(
        key: &[IntPolynomial],
        std_dev: f64,
        fft: &FftProcessor,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + CryptoRng,
    {
        let n = fft.dimension();
        let module_rank = key.len();

        let mut polys = Vec::with_capacity(module_rank + 1);
        let mut b: TorusPolynomial = (0..n)
            .map(|_| gaussian_t32(Torus32::ZERO, std_dev, rng))
            .collect();

        for s in key {
            let a = TorusPolynomial::new(sample_uniform_torus_values(n, rng));
            fft.add_mul_assign(&mut b, s, &a);
            polys.push(a);
        }
        polys.push(b);

        Self {
            polys,
            variance: std_dev * std_dev,
        }
    }

    /// Encrypts the torus polynomial `mu` under `key`.
    pub fn encrypt<R>(
        mu: &TorusPolynomial,
        key: &[IntPolynomial],
        std_dev: f64,
        fft: &FftProcessor,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + CryptoRng,
    {
        let mut result = Self::encrypt_zero(key, std_dev, fft, rng);
        result.b_mut().add_assign_element_wise(mu);
        result
    }

    /// Encrypts the torus value `mu` in the constant coefficient.
    pub fn encrypt_t<R>(
        mu: Torus32,
        key: &[IntPolynomial],
        std_dev: f64,
        fft: &FftProcessor,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + CryptoRng,
    {
        let mut result = Self::encrypt_zero(key, std_dev, fft, rng);
        result.b_mut()[0] += mu;
        result
    }

    /// Computes the phase `b - Σ a_i * s_i`.
    ///
    /// # Panics
    ///
    /// Panics if the key length differs from the module rank.
    pub fn phase(&self, key: &[IntPolynomial], fft: &FftProcessor) -> TorusPolynomial {
        assert_eq!(key.len(), self.module_rank(), "module rank mismatch");
        let mut phase = self.b().clone();
        for (a, s) in self.polys.iter().zip(key) {
            fft.sub_mul_assign(&mut phase, s, a);
        }
        phase
    }

    /// Decrypts every coefficient to the closest multiple of `1 / msize` of the phase.
    ///
    /// # Panics
    ///
    /// Panics if the key length differs from the module rank, or if `msize < 2`.
    pub fn decrypt(
        &self,
        key: &[IntPolynomial],
        msize: usize,
        fft: &FftProcessor,
    ) -> TorusPolynomial {
        let mut phase = self.phase(key, fft);
        phase
            .iter_mut()
            .for_each(|c| *c = approx_phase(*c, msize));
        phase
    }

    /// Decrypts the constant coefficient to the closest multiple of `1 / msize`.
    #[inline]
    pub fn decrypt_t(&self, key: &[IntPolynomial], msize: usize, fft: &FftProcessor) -> Torus32 {
        approx_phase(self.phase(key, fft)[0], msize)
    }
}

#[cfg(test)]
mod tests {
    use algebra::{
        mod_switch_to_torus, random::sample_binary_values, FftProcessor, IntPolynomial, Torus32,
        TorusPolynomial,
    };
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha12Rng;

    use crate::Tlwe;

    fn binary_key(k: usize, n: usize, rng: &mut ChaCha12Rng) -> Vec<IntPolynomial> {
        (0..k)
            .map(|_| IntPolynomial::new(sample_binary_values(n, rng)))
            .collect()
    }

    #[test]
    fn test_encrypt_decrypt() {
        let mut rng = ChaCha12Rng::seed_from_u64(9);
        for k in [1usize, 2] {
            let n = 1024;
            let fft = FftProcessor::new(n).unwrap();
            let key = binary_key(k, n, &mut rng);

            let mu: TorusPolynomial = (0..n)
                .map(|_| mod_switch_to_torus(rng.gen_range(0..8), 8))
                .collect();
            let c = Tlwe::encrypt(&mu, &key, 2f64.powi(-25), &fft, &mut rng);
            assert_eq!(c.module_rank(), k);
            assert_eq!(c.decrypt(&key, 8, &fft), mu);
            assert!(c.phase(&key, &fft).norm_inf_distance(&mu) < 2f64.powi(-18));
        }
    }

    #[test]
    fn test_encrypt_t() {
        let mut rng = ChaCha12Rng::seed_from_u64(10);
        let n = 256;
        let fft = FftProcessor::new(n).unwrap();
        let key = binary_key(1, n, &mut rng);

        let mu = Torus32::new(1 << 29);
        let c = Tlwe::encrypt_t(mu, &key, 2f64.powi(-25), &fft, &mut rng);
        assert_eq!(c.decrypt_t(&key, 8, &fft), mu);
        let decrypted = c.decrypt(&key, 8, &fft);
        assert!(decrypted.iter().skip(1).all(|&x| x == Torus32::ZERO));

        let t = Tlwe::noiseless_trivial_t(1, n, mu);
        assert_eq!(t.phase(&key, &fft)[0], mu);
        assert_eq!(t.variance(), 0.);
    }
}

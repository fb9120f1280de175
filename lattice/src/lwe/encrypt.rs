use algebra::{
    approx_phase,
    random::{gaussian_t32, sample_uniform_torus_values},
    Torus32,
};
use rand::{CryptoRng, Rng};

use crate::utils::dot_product;

use super::Lwe;

impl Lwe {
    /// Generates a [`Lwe`] sample encrypting `0` under `key`.
    ///
    /// `a` is uniform in `T^n` and `b = <a, key> + e` with `e ~ N(0, std_dev^2)`.
    pub fn generate_random_zero_sample<R>(key: &[i32], std_dev: f64, rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        Self::encrypt(Torus32::ZERO, key, std_dev, rng)
    }

    /// Encrypts the torus `message` under the binary `key`.
    ///
    /// The variance of the result is `std_dev^2`.
    pub fn encrypt<R>(message: Torus32, key: &[i32], std_dev: f64, rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        let a = sample_uniform_torus_values(key.len(), rng);
        let b = gaussian_t32(message, std_dev, rng) + dot_product(&a, key);
        Self::new(a, b, std_dev * std_dev)
    }

    /// Encrypts the torus `message` with a noise `noise` drawn by the caller.
    ///
    /// `noise` is a real number, a fraction of the torus. `variance` is recorded
    /// as the noise variance of the sample.
    pub fn encrypt_with_external_noise<R>(
        message: Torus32,
        noise: f64,
        variance: f64,
        key: &[i32],
        rng: &mut R,
    ) -> Self
    where
        R: Rng + CryptoRng,
    {
        let a = sample_uniform_torus_values(key.len(), rng);
        let b = message + Torus32::from_f64(noise) + dot_product(&a, key);
        Self::new(a, b, variance)
    }

    /// Computes the phase `b - <a, key>`.
    ///
    /// # Panics
    ///
    /// Panics if the key length differs from the dimension.
    #[inline]
    pub fn phase(&self, key: &[i32]) -> Torus32 {
        assert_eq!(self.dimension(), key.len(), "dimension mismatch");
        self.b() - dot_product(self.a(), key)
    }

    /// Decrypts to the closest multiple of `1 / msize` of the phase.
    ///
    /// # Panics
    ///
    /// Panics if the key length differs from the dimension, or if `msize < 2`.
    #[inline]
    pub fn decrypt(&self, key: &[i32], msize: usize) -> Torus32 {
        approx_phase(self.phase(key), msize)
    }
}

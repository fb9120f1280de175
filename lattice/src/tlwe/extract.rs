use algebra::IntPolynomial;

use crate::Lwe;

use super::Tlwe;

impl Tlwe {
    /// Extracts the coefficient at `index` into an [`Lwe`] sample of dimension `k * N`.
    ///
    /// The result decrypts under [`extract_lwe_key`] of the [`Tlwe`] key to the
    /// `index`-th coefficient of the message.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn extract_lwe(&self, index: usize) -> Lwe {
        let mut result = Lwe::zero(self.module_rank() * self.coeff_count());
        self.extract_lwe_into(index, &mut result);
        result
    }

    /// Extracts the coefficient at `index` into `destination`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N` or if `destination` has not dimension `k * N`.
    pub fn extract_lwe_into(&self, index: usize, destination: &mut Lwe) {
        let n = self.coeff_count();
        assert!(index < n, "extraction index out of range");
        assert_eq!(
            destination.dimension(),
            self.module_rank() * n,
            "dimension mismatch"
        );

        let (a, b) = destination.a_mut_b_mut();
        for (chunk, poly) in a.chunks_exact_mut(n).zip(self.polys.iter()) {
            let coeffs = poly.as_slice();
            for (j, v) in chunk.iter_mut().enumerate() {
                *v = if j <= index {
                    coeffs[index - j]
                } else {
                    -coeffs[n + index - j]
                };
            }
        }
        *b = self.b()[index];
        destination.set_variance(self.variance);
    }
}

/// Returns the [`Lwe`] key under which the samples extracted from a [`Tlwe`] decrypt.
///
/// It is the concatenation of the coefficients of the `k` key polynomials.
#[inline]
pub fn extract_lwe_key(key: &[IntPolynomial]) -> Vec<i32> {
    key.iter()
        .flat_map(|s| s.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use algebra::{
        mod_switch_to_torus, random::sample_binary_values, FftProcessor, IntPolynomial,
        TorusPolynomial,
    };
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha12Rng;

    use crate::{extract_lwe_key, Tlwe};

    #[test]
    fn test_extract_every_index() {
        let mut rng = ChaCha12Rng::seed_from_u64(15);
        for k in [1usize, 2] {
            let n = 64;
            let fft = FftProcessor::new(n).unwrap();
            let key: Vec<IntPolynomial> = (0..k)
                .map(|_| IntPolynomial::new(sample_binary_values(n, &mut rng)))
                .collect();
            let lwe_key = extract_lwe_key(&key);
            assert_eq!(lwe_key.len(), k * n);

            let mu: TorusPolynomial = (0..n)
                .map(|_| mod_switch_to_torus(rng.gen_range(0..16), 16))
                .collect();
            let c = Tlwe::encrypt(&mu, &key, 0., &fft, &mut rng);

            for index in 0..n {
                let lwe = c.extract_lwe(index);
                assert_eq!(lwe.phase(&lwe_key), mu[index], "index = {index}");
                assert_eq!(lwe.variance(), c.variance());
            }
        }
    }
}

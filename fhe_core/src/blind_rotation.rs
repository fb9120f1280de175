//! Blind rotation key.
//!
//! In FHE, bootstrapping is a technique used to refresh the ciphertexts
//! during the homomorphic computation. As homomorphic operations are
//! performed on encrypted data, the noise in the ciphertext increases,
//! and if left unchecked, it can eventually lead to decryption errors.
//! Bootstrapping is a method to reduce the noise and refresh the
//! ciphertexts, allowing the computation to continue.
//!
//! The blind rotation is its first half: it rotates a test polynomial by
//! the phase of a [`Lwe`] sample switched to `Z_2N`, without learning it.

use std::time::Instant;

use algebra::{utils::Size, FftProcessor, Torus32, TorusPolynomial};
use lattice::{
    utils::{ExternalProductSpace, TlweSpace},
    FourierTgsw, Lwe, Tgsw, Tlwe,
};
use log::debug;
use rand::{CryptoRng, Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use rayon::prelude::*;

use crate::{
    lwe_modulus_switch, LweSecretKey, ModulusSwitchedLwe, SecretKeyPack, TgswParameters,
    TlweSecretKey,
};

/// Binary blind rotation key based on TGSW.
///
/// The sample `i` is a [`FourierTgsw`] encryption of the bit `s_i` of the
/// LWE secret key under the TLWE secret key.
#[derive(Debug, Clone)]
pub struct BlindRotationKey {
    key: Vec<FourierTgsw>,
    module_rank: usize,
    ring_dimension: usize,
    fft: FftProcessor,
}

impl BlindRotationKey {
    /// Generates the [`BlindRotationKey`] of `secret_key_pack`.
    #[inline]
    pub fn generate<R>(secret_key_pack: &SecretKeyPack, rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        Self::generate_with_keys(
            secret_key_pack.lwe_secret_key(),
            secret_key_pack.tlwe_secret_key(),
            secret_key_pack.parameters().tgsw_params(),
            secret_key_pack.fft(),
            rng,
        )
    }

    /// Generates the [`BlindRotationKey`] encrypting `lwe_secret_key`
    /// under `tlwe_secret_key`.
    ///
    /// One seed is drawn from `rng` per sample, then the samples are encrypted
    /// in parallel, each with a generator seeded by its own seed.
    pub fn generate_with_keys<R>(
        lwe_secret_key: &LweSecretKey,
        tlwe_secret_key: &TlweSecretKey,
        params: &TgswParameters,
        fft: &FftProcessor,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + CryptoRng,
    {
        let start = Instant::now();

        let gadget = params.gadget();
        let std_dev = params.tlwe_params.alpha_min;
        let module_rank = params.tlwe_params.module_rank;
        let ring_dimension = params.tlwe_params.ring_dimension;
        assert_eq!(
            tlwe_secret_key.module_rank(),
            module_rank,
            "module rank mismatch"
        );
        assert_eq!(fft.dimension(), ring_dimension, "ring dimension mismatch");

        let seeds: Vec<[u8; 32]> = (0..lwe_secret_key.dimension())
            .map(|_| rng.gen())
            .collect();

        let key: Vec<FourierTgsw> = lwe_secret_key
            .as_slice()
            .par_iter()
            .zip(seeds.par_iter())
            .map_init(
                || fft.shallow_copy(),
                |fft, (&s, seed)| {
                    let mut rng = ChaCha12Rng::from_seed(*seed);
                    let tgsw = Tgsw::encrypt_int(
                        s,
                        tlwe_secret_key.polys(),
                        gadget.clone(),
                        std_dev,
                        fft,
                        &mut rng,
                    );
                    FourierTgsw::from_tgsw(&tgsw, fft)
                },
            )
            .collect();

        debug!(
            "generated blind rotation key: n = {}, N = {}, k = {}, l = {}, Bgbit = {} in {:?}",
            key.len(),
            ring_dimension,
            module_rank,
            params.length,
            params.basis_bits,
            start.elapsed()
        );

        Self {
            key,
            module_rank,
            ring_dimension,
            fft: fft.clone(),
        }
    }

    /// Returns the number of samples, the lwe dimension `n`.
    #[inline]
    pub fn lwe_dimension(&self) -> usize {
        self.key.len()
    }

    /// Returns the module rank `k`.
    #[inline]
    pub fn module_rank(&self) -> usize {
        self.module_rank
    }

    /// Returns the ring dimension `N`.
    #[inline]
    pub fn ring_dimension(&self) -> usize {
        self.ring_dimension
    }

    /// Returns the samples of this key.
    #[inline]
    pub fn key(&self) -> &[FourierTgsw] {
        &self.key
    }

    /// Returns the fft processor of this key.
    #[inline]
    pub fn fft(&self) -> &FftProcessor {
        &self.fft
    }

    /// Performs the blind rotation operation.
    ///
    /// The accumulator starts as the trivial sample of `X^(2N - b) * test_vector`,
    /// then for every nonzero `a_i` becomes `ACC + BK_i ⊡ ((X^(a_i) - 1) * ACC)`.
    /// The result encrypts `X^(-phase) * test_vector`.
    ///
    /// # Panics
    ///
    /// Panics if `lwe` is not switched to `2N` or if its dimension differs from `n`.
    pub fn blind_rotate(&self, test_vector: &TorusPolynomial, lwe: &ModulusSwitchedLwe) -> Tlwe {
        let k = self.module_rank;
        let n = self.ring_dimension;
        assert_eq!(lwe.modulus(), n << 1, "modulus mismatch");
        assert_eq!(lwe.a().len(), self.key.len(), "dimension mismatch");

        let b = lwe.b();
        let mut acc = if b == 0 {
            Tlwe::noiseless_trivial(k, test_vector)
        } else {
            Tlwe::noiseless_trivial(k, &test_vector.mul_by_x_ai((n << 1) - b))
        };

        let length = self.key.first().map_or(1, |bk| bk.gadget().length());
        let mut temp = TlweSpace::new(k, n);
        let mut space = ExternalProductSpace::new(k, length, n);

        for (bk, &a) in self.key.iter().zip(lwe.a()) {
            if a == 0 {
                continue;
            }
            let variance = acc.variance() + bk.external_product_variance(n);
            // ACC + BK_i ⊡ ((X^a - 1) * ACC)
            acc.mul_by_x_ai_minus_one_into(a, &mut temp);
            bk.external_product_inplace(&mut temp, &self.fft, &mut space);
            acc.add_assign_component_wise(&temp);
            acc.set_variance(variance);
        }

        acc
    }

    /// Switches `lwe` to `2N`, rotates the constant test polynomial `mu` and
    /// extracts the constant coefficient.
    ///
    /// The result encrypts `mu` if the phase of `lwe` lies in `(0, 1/2)`, `-mu`
    /// otherwise, under the extracted key of dimension `k * N`.
    #[inline]
    pub fn blind_rotate_and_extract(&self, mu: Torus32, lwe: &Lwe) -> Lwe {
        let test_vector = TorusPolynomial::constant_coefficients(self.ring_dimension, mu);
        self.blind_rotate_test_vector_and_extract(&test_vector, lwe)
    }

    /// Switches `lwe` to `2N`, rotates `test_vector` and extracts the constant
    /// coefficient, that is `test_vector[p]` for a switched phase `p < N` and
    /// `-test_vector[p - N]` otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `test_vector` does not have `N` coefficients.
    pub fn blind_rotate_test_vector_and_extract(
        &self,
        test_vector: &TorusPolynomial,
        lwe: &Lwe,
    ) -> Lwe {
        assert_eq!(
            test_vector.coeff_count(),
            self.ring_dimension,
            "ring dimension mismatch"
        );
        let switched = lwe_modulus_switch(lwe, self.ring_dimension << 1);
        self.blind_rotate(test_vector, &switched).extract_lwe(0)
    }
}

impl Size for BlindRotationKey {
    #[inline]
    fn size(&self) -> usize {
        self.key.size()
    }
}

#[cfg(test)]
mod tests {
    use algebra::mod_switch_to_torus;

    use crate::{ConstParameters, LookUpTable, Parameters};

    use super::*;

    fn test_params() -> Parameters {
        Parameters::new(ConstParameters {
            lwe_dimension: 32,
            lwe_noise_std_dev: 2f64.powi(-15),
            max_noise_std_dev: 0.012467,
            ring_dimension: 512,
            module_rank: 1,
            ring_noise_std_dev: 2f64.powi(-25),
            blind_rotation_basis_bits: 7,
            blind_rotation_length: 3,
            key_switching_basis_bits: 2,
            key_switching_length: 8,
            key_switching_std_dev: 2f64.powi(-15),
        })
        .unwrap()
    }

    #[test]
    fn test_blind_rotate() {
        let mut rng = ChaCha12Rng::seed_from_u64(53);
        let sk = SecretKeyPack::new(test_params(), &mut rng).unwrap();
        let bk = BlindRotationKey::generate(&sk, &mut rng);
        assert_eq!(bk.lwe_dimension(), 32);

        let mu = mod_switch_to_torus(1, 8);
        let extracted_key = sk.extracted_lwe_secret_key().as_slice();
        for message in [true, false, true, false] {
            let c = sk.encrypt(message, &mut rng);
            let u = bk.blind_rotate_and_extract(mu, &c);
            assert_eq!(u.dimension(), 512);
            let phase = u.phase(extracted_key);
            let expect = if message { mu } else { -mu };
            assert!(phase.distance(expect) < 2f64.powi(-8));
        }
    }

    #[test]
    fn test_blind_rotate_lut() {
        let mut rng = ChaCha12Rng::seed_from_u64(59);
        let sk = SecretKeyPack::new(test_params(), &mut rng).unwrap();
        let bk = BlindRotationKey::generate(&sk, &mut rng);

        let m = 4;
        let lut = LookUpTable::generate(512, m, |x| (x + 1) % m).unwrap();
        let encoder = lut.encoder();
        let extracted_key = sk.extracted_lwe_secret_key().as_slice();
        for x in [0, 1, 2, 3, 0, 3] {
            let c = Lwe::encrypt(
                encoder.encode(x),
                sk.lwe_secret_key().as_slice(),
                2f64.powi(-15),
                &mut rng,
            );
            let u = bk.blind_rotate_test_vector_and_extract(lut.polynomial(), &c);
            assert_eq!(encoder.decode(u.phase(extracted_key)), (x + 1) % m);
        }
    }
}

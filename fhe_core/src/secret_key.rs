use std::time::Instant;

use algebra::{random::sample_binary_values, FftProcessor, IntPolynomial};
use lattice::{extract_lwe_key, Lwe};
use log::debug;
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::{decode, encode, noise_distance, FHECoreError, Parameters};

/// Binary LWE secret key, refers to **`s`** in the paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweSecretKey {
    key: Vec<i32>,
}

impl LweSecretKey {
    /// Creates a [`LweSecretKey`] from its binary coefficients.
    ///
    /// # Panics
    ///
    /// Panics if a coefficient is neither `0` nor `1`.
    #[inline]
    pub fn new(key: Vec<i32>) -> Self {
        assert!(
            key.iter().all(|&s| s == 0 || s == 1),
            "lwe secret key must be binary"
        );
        Self { key }
    }

    /// Samples a uniform binary [`LweSecretKey`] of dimension `dimension`.
    #[inline]
    pub fn generate<R>(dimension: usize, rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        Self {
            key: sample_binary_values(dimension, rng),
        }
    }

    /// Returns the dimension `n` of this key.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.key.len()
    }

    /// Returns the coefficients of this key.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.key
    }
}

/// Binary TLWE secret key, `k` polynomials of `N` coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlweSecretKey {
    key: Vec<IntPolynomial>,
}

impl TlweSecretKey {
    /// Samples a uniform binary [`TlweSecretKey`].
    pub fn generate<R>(module_rank: usize, ring_dimension: usize, rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        let key = (0..module_rank)
            .map(|_| IntPolynomial::new(sample_binary_values(ring_dimension, rng)))
            .collect();
        Self { key }
    }

    /// Returns the module rank `k`.
    #[inline]
    pub fn module_rank(&self) -> usize {
        self.key.len()
    }

    /// Returns the `k` polynomials of this key.
    #[inline]
    pub fn polys(&self) -> &[IntPolynomial] {
        &self.key
    }

    /// Returns the [`LweSecretKey`] of dimension `k * N` the samples
    /// extracted from this key's [`lattice::Tlwe`] samples decrypt under.
    #[inline]
    pub fn extract_lwe_key(&self) -> LweSecretKey {
        LweSecretKey {
            key: extract_lwe_key(&self.key),
        }
    }
}

/// Boolean fhe's secret keys pack.
///
/// This struct contains the LWE secret key, the TLWE secret key,
/// the LWE key extracted from it, an fft processor
/// and boolean fhe's parameters.
#[derive(Debug, Clone)]
pub struct SecretKeyPack {
    /// LWE secret key
    lwe_secret_key: LweSecretKey,
    /// TLWE secret key
    tlwe_secret_key: TlweSecretKey,
    /// The key of the extracted lwe samples
    extracted_lwe_secret_key: LweSecretKey,
    /// boolean fhe's parameters
    parameters: Parameters,
    /// fft processor of the ring dimension
    fft: FftProcessor,
}

impl SecretKeyPack {
    /// Creates a new [`SecretKeyPack`].
    pub fn new<R>(parameters: Parameters, rng: &mut R) -> Result<Self, FHECoreError>
    where
        R: Rng + CryptoRng,
    {
        let start = Instant::now();

        let fft = FftProcessor::new(parameters.ring_dimension())?;
        let lwe_secret_key = LweSecretKey::generate(parameters.lwe_dimension(), rng);
        let tlwe_secret_key =
            TlweSecretKey::generate(parameters.module_rank(), parameters.ring_dimension(), rng);
        let extracted_lwe_secret_key = tlwe_secret_key.extract_lwe_key();

        debug!(
            "sampled secret keys: n = {}, N = {}, k = {} in {:?}",
            parameters.lwe_dimension(),
            parameters.ring_dimension(),
            parameters.module_rank(),
            start.elapsed()
        );

        Ok(Self {
            lwe_secret_key,
            tlwe_secret_key,
            extracted_lwe_secret_key,
            parameters,
            fft,
        })
    }

    /// Returns the lwe secret key of this [`SecretKeyPack`].
    #[inline]
    pub fn lwe_secret_key(&self) -> &LweSecretKey {
        &self.lwe_secret_key
    }

    /// Returns the tlwe secret key of this [`SecretKeyPack`].
    #[inline]
    pub fn tlwe_secret_key(&self) -> &TlweSecretKey {
        &self.tlwe_secret_key
    }

    /// Returns the extracted lwe secret key of this [`SecretKeyPack`].
    #[inline]
    pub fn extracted_lwe_secret_key(&self) -> &LweSecretKey {
        &self.extracted_lwe_secret_key
    }

    /// Returns the parameters of this [`SecretKeyPack`].
    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the fft processor of this [`SecretKeyPack`].
    #[inline]
    pub fn fft(&self) -> &FftProcessor {
        &self.fft
    }

    /// Encrypts a bit into a [`Lwe`] sample with noise `lwe_noise_std_dev`.
    #[inline]
    pub fn encrypt<R>(&self, message: bool, rng: &mut R) -> Lwe
    where
        R: Rng + CryptoRng,
    {
        Lwe::encrypt(
            encode(message),
            self.lwe_secret_key.as_slice(),
            self.parameters.lwe_noise_std_dev(),
            rng,
        )
    }

    /// Decrypts the [`Lwe`] sample back to a bit.
    #[inline]
    pub fn decrypt(&self, cipher_text: &Lwe) -> bool {
        decode(cipher_text.phase(self.lwe_secret_key.as_slice()))
    }

    /// Decrypts the [`Lwe`] sample back to a bit, together with the distance
    /// of its phase to the encoded message.
    #[inline]
    pub fn decrypt_with_noise(&self, cipher_text: &Lwe) -> (bool, f64) {
        let phase = cipher_text.phase(self.lwe_secret_key.as_slice());
        (decode(phase), noise_distance(phase))
    }
}

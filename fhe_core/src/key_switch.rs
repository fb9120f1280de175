use std::time::Instant;

use algebra::{random::TorusGaussian, utils::Size, Torus32};
use lattice::Lwe;
use log::debug;
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::{FHECoreError, KeySwitchingParameters, LweSecretKey, SecretKeyPack};

/// The Key Switching Key.
///
/// This struct stores the key that switches a [`Lwe`] sample of the extracted
/// secret key, of dimension `k * N`, to a [`Lwe`] sample of the LWE secret key,
/// of dimension `n`.
///
/// The entry `(i, j, w)` encrypts `w * s'_i / 2^((j + 1) * basis_bits)` under the
/// output key, `s'` being the input key. Entries with `w = 0` are never used
/// and are kept as trivial zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeySwitchingKey {
    /// Input dimension, refers to **`k * N`** in the paper.
    input_dimension: usize,
    /// Output dimension, refers to **`n`** in the paper.
    output_dimension: usize,
    /// Decomposition basis bits.
    basis_bits: u32,
    /// Decomposition length, refers to **`t`** in the paper.
    length: usize,
    /// Variance of the noise of every entry.
    variance: f64,
    /// Key Switching Key data, indexed by `(i * t + j) * 2^basis_bits + w`.
    key: Vec<Lwe>,
}

impl KeySwitchingKey {
    /// Generates a new [`KeySwitchingKey`] from the extracted lwe secret key
    /// to the lwe secret key of `secret_key_pack`.
    pub fn generate<R>(secret_key_pack: &SecretKeyPack, rng: &mut R) -> Result<Self, FHECoreError>
    where
        R: Rng + CryptoRng,
    {
        Self::generate_with_keys(
            secret_key_pack.extracted_lwe_secret_key(),
            secret_key_pack.lwe_secret_key(),
            secret_key_pack.parameters().key_switching_params(),
            rng,
        )
    }

    /// Generates a new [`KeySwitchingKey`] from `input_key` to `output_key`.
    ///
    /// The gaussian noises of all entries are drawn first, their empirical
    /// mean is subtracted so that the noise of the key is centered.
    pub fn generate_with_keys<R>(
        input_key: &LweSecretKey,
        output_key: &LweSecretKey,
        params: &KeySwitchingParameters,
        rng: &mut R,
    ) -> Result<Self, FHECoreError>
    where
        R: Rng + CryptoRng,
    {
        let start = Instant::now();

        let basis_bits = params.basis_bits;
        let basis = params.basis();
        let length = params.length;
        let input_dimension = input_key.dimension();
        let output_dimension = output_key.dimension();
        let variance = params.std_dev * params.std_dev;

        let gaussian = TorusGaussian::new(0., params.std_dev)?;
        let count = input_dimension * length * (basis - 1);
        let mut noises: Vec<f64> = (0..count).map(|_| gaussian.sample_f64(rng)).collect();
        if count > 0 {
            let mean = noises.iter().sum::<f64>() / count as f64;
            noises.iter_mut().for_each(|e| *e -= mean);
        }
        let mut noises = noises.into_iter();

        let mut key = Vec::with_capacity(input_dimension * length * basis);
        for &s in input_key.as_slice() {
            for j in 0..length as u32 {
                let shift = 32 - (j + 1) * basis_bits;
                key.push(Lwe::zero(output_dimension));
                for w in 1..basis as i32 {
                    let message = Torus32::from_bits(((w * s) as u32) << shift);
                    let noise = noises.next().unwrap_or_default();
                    key.push(Lwe::encrypt_with_external_noise(
                        message,
                        noise,
                        variance,
                        output_key.as_slice(),
                        rng,
                    ));
                }
            }
        }

        debug!(
            "generated key switching key: {} -> {}, t = {}, basis bits = {} in {:?}",
            input_dimension,
            output_dimension,
            length,
            basis_bits,
            start.elapsed()
        );

        Ok(Self {
            input_dimension,
            output_dimension,
            basis_bits,
            length,
            variance,
            key,
        })
    }

    /// Returns the input dimension of this [`KeySwitchingKey`].
    #[inline]
    pub fn input_dimension(&self) -> usize {
        self.input_dimension
    }

    /// Returns the output dimension of this [`KeySwitchingKey`].
    #[inline]
    pub fn output_dimension(&self) -> usize {
        self.output_dimension
    }

    /// Returns the decomposition basis bits of this [`KeySwitchingKey`].
    #[inline]
    pub fn basis_bits(&self) -> u32 {
        self.basis_bits
    }

    /// Returns the decomposition length of this [`KeySwitchingKey`].
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the entry encrypting `w * s'_i / 2^((j + 1) * basis_bits)`.
    #[inline]
    pub fn entry(&self, i: usize, j: usize, w: usize) -> &Lwe {
        let basis = 1 << self.basis_bits;
        &self.key[(i * self.length + j) * basis + w]
    }

    /// Returns the variance added by one key switching,
    /// `N_src * t * var_ks + N_src * ε_ks^2` with `ε_ks = 2^(-t * basis_bits) / 2`.
    #[inline]
    pub fn key_switching_variance(&self) -> f64 {
        let epsilon = 2f64.powi(-((self.length as u32 * self.basis_bits) as i32)) / 2.;
        let n = self.input_dimension as f64;
        n * self.length as f64 * self.variance + n * epsilon * epsilon
    }

    /// Switches `cipher_text` to the output key.
    ///
    /// # Panics
    ///
    /// Panics if the dimension of `cipher_text` differs from the input dimension.
    #[inline]
    pub fn key_switch(&self, cipher_text: &Lwe) -> Lwe {
        let mut result = Lwe::zero(self.output_dimension);
        self.key_switch_into(cipher_text, &mut result);
        result
    }

    /// Switches `cipher_text` to the output key, writing into `destination`.
    ///
    /// Each `a_i`, shifted by the precision offset `2^(31 - t * basis_bits)`, is
    /// split into `t` digits of `basis_bits` bits; every nonzero digit `w` at
    /// level `j` subtracts the entry `(i, j, w)`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    pub fn key_switch_into(&self, cipher_text: &Lwe, destination: &mut Lwe) {
        assert_eq!(
            cipher_text.dimension(),
            self.input_dimension,
            "dimension mismatch"
        );
        assert_eq!(
            destination.dimension(),
            self.output_dimension,
            "dimension mismatch"
        );

        let basis = 1usize << self.basis_bits;
        let mask = (basis - 1) as u32;
        let total_bits = self.length as u32 * self.basis_bits;
        let precision_offset = if total_bits >= 32 {
            0
        } else {
            1u32 << (31 - total_bits)
        };

        destination.set_zero();
        *destination.b_mut() = cipher_text.b();

        for (&a, entries) in cipher_text
            .a()
            .iter()
            .zip(self.key.chunks_exact(self.length * basis))
        {
            let a = a.to_bits().wrapping_add(precision_offset);
            for (j, level) in entries.chunks_exact(basis).enumerate() {
                let shift = 32 - (j as u32 + 1) * self.basis_bits;
                let digit = ((a >> shift) & mask) as usize;
                if digit != 0 {
                    destination.sub_assign_component_wise(&level[digit]);
                }
            }
        }

        destination.set_variance(cipher_text.variance() + self.key_switching_variance());
    }
}

impl Size for KeySwitchingKey {
    #[inline]
    fn size(&self) -> usize {
        self.key.size()
    }
}

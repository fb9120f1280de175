//! implementation of key generation.

use fhe_core::{FHECoreError, Parameters, SecretKeyPack};
use rand::{CryptoRng, Rng};

use crate::EvaluationKey;

/// Struct of key generation.
pub struct KeyGen;

impl KeyGen {
    /// Generate secret key pack
    #[inline]
    pub fn generate_secret_key<R>(
        params: Parameters,
        csrng: &mut R,
    ) -> Result<SecretKeyPack, FHECoreError>
    where
        R: Rng + CryptoRng,
    {
        SecretKeyPack::new(params, csrng)
    }

    /// Generate the secret key pack and its evaluation key
    pub fn generate_keys<R>(
        params: Parameters,
        csrng: &mut R,
    ) -> Result<(SecretKeyPack, EvaluationKey), FHECoreError>
    where
        R: Rng + CryptoRng,
    {
        let sk = SecretKeyPack::new(params, csrng)?;
        let ek = EvaluationKey::new(&sk, csrng)?;
        Ok((sk, ek))
    }
}

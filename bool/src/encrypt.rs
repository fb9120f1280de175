use fhe_core::{encode, LutEncoder, LweParameters, LweSecretKey, SecretKeyPack};
use lattice::Lwe;
use rand::{CryptoRng, Rng};

/// Encryptor
#[derive(Debug, Clone)]
pub struct Encryptor {
    lwe_secret_key: LweSecretKey,
    params: LweParameters,
}

impl Encryptor {
    /// New a Encryptor instance.
    #[inline]
    pub fn new(sk: &SecretKeyPack) -> Self {
        Self {
            lwe_secret_key: sk.lwe_secret_key().clone(),
            params: *sk.parameters().lwe_params(),
        }
    }

    /// Encrypt a bool message, `true` as `1/8` and `false` as `-1/8`.
    #[inline]
    pub fn encrypt<R>(&self, message: bool, rng: &mut R) -> Lwe
    where
        R: Rng + CryptoRng,
    {
        Lwe::encrypt(
            encode(message),
            self.lwe_secret_key.as_slice(),
            self.params.alpha_min,
            rng,
        )
    }

    /// Encrypt a message of `Z_m`, encoded by `encoder` as `message / 2m`,
    /// for the programmable bootstrapping.
    #[inline]
    pub fn encrypt_message<R>(&self, message: usize, encoder: LutEncoder, rng: &mut R) -> Lwe
    where
        R: Rng + CryptoRng,
    {
        Lwe::encrypt(
            encoder.encode(message),
            self.lwe_secret_key.as_slice(),
            self.params.alpha_min,
            rng,
        )
    }

    /// Encrypt the `width` lowest bits of `value`, least significant bit first.
    ///
    /// # Panics
    ///
    /// Panics if `width > 64`.
    pub fn encrypt_bits<R>(&self, value: u64, width: usize, rng: &mut R) -> Vec<Lwe>
    where
        R: Rng + CryptoRng,
    {
        assert!(width <= 64, "width {width} exceeds 64 bits");
        (0..width)
            .map(|i| self.encrypt((value >> i) & 1 == 1, rng))
            .collect()
    }
}

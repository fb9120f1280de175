use fhe_core::{decode, noise_distance, LutEncoder, LweSecretKey, SecretKeyPack};
use lattice::Lwe;

/// Decryptor
#[derive(Debug, Clone)]
pub struct Decryptor {
    lwe_secret_key: LweSecretKey,
}

impl Decryptor {
    /// Create a Decryptor instance.
    #[inline]
    pub fn new(sk: &SecretKeyPack) -> Self {
        Self {
            lwe_secret_key: sk.lwe_secret_key().clone(),
        }
    }

    /// Decrypt a ciphertext into a bool message, by the sign of its phase.
    #[inline]
    pub fn decrypt(&self, cipher_text: &Lwe) -> bool {
        decode(cipher_text.phase(self.lwe_secret_key.as_slice()))
    }

    /// Decrypt a ciphertext into a bool message and the distance of its
    /// phase to the encoded message, as a fraction of the torus.
    #[inline]
    pub fn decrypt_with_noise(&self, cipher_text: &Lwe) -> (bool, f64) {
        let phase = cipher_text.phase(self.lwe_secret_key.as_slice());
        (decode(phase), noise_distance(phase))
    }

    /// Decrypt a ciphertext into a message of `Z_m`, rounding its phase with `encoder`.
    #[inline]
    pub fn decrypt_message(&self, cipher_text: &Lwe, encoder: LutEncoder) -> usize {
        encoder.decode(cipher_text.phase(self.lwe_secret_key.as_slice()))
    }

    /// Decrypt ciphertexts of bits, least significant bit first.
    ///
    /// # Panics
    ///
    /// Panics if there are more than 64 ciphertexts.
    pub fn decrypt_bits(&self, cipher_texts: &[Lwe]) -> u64 {
        assert!(cipher_texts.len() <= 64, "more than 64 bits");
        cipher_texts
            .iter()
            .enumerate()
            .fold(0, |acc, (i, c)| acc | (u64::from(self.decrypt(c)) << i))
    }
}

use std::time::Instant;

use algebra::{utils::Size, Torus32};
use fhe_core::{
    encode, BlindRotationKey, FHECoreError, KeySwitchingKey, LookUpTable, Parameters,
    SecretKeyPack, FALSE_MESSAGE, TRUE_MESSAGE,
};
use lattice::Lwe;
use log::{info, trace};
use rand::{CryptoRng, Rng};
use rayon::prelude::*;

use super::BinaryGate;

/// The evaluation key of the homomorphic encryption scheme, the cloud key.
///
/// It holds the blind rotation key, the key switching key and the
/// parameters. It is immutable once created and can be shared between
/// threads.
#[derive(Debug, Clone)]
pub struct EvaluationKey {
    /// Blind rotation key.
    blind_rotation_key: BlindRotationKey,
    /// Key switching key.
    key_switching_key: KeySwitchingKey,
    /// The parameters of the fully homomorphic encryption scheme.
    parameters: Parameters,
}

impl EvaluationKey {
    /// Returns the parameters of this [`EvaluationKey`].
    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the blind rotation key of this [`EvaluationKey`].
    #[inline]
    pub fn blind_rotation_key(&self) -> &BlindRotationKey {
        &self.blind_rotation_key
    }

    /// Returns the key switching key of this [`EvaluationKey`].
    #[inline]
    pub fn key_switching_key(&self) -> &KeySwitchingKey {
        &self.key_switching_key
    }

    /// Creates a new [`EvaluationKey`] from the given [`SecretKeyPack`].
    pub fn new<R>(secret_key_pack: &SecretKeyPack, rng: &mut R) -> Result<Self, FHECoreError>
    where
        R: Rng + CryptoRng,
    {
        let start = Instant::now();
        let parameters = *secret_key_pack.parameters();

        let blind_rotation_key = BlindRotationKey::generate(secret_key_pack, rng);
        let key_switching_key = KeySwitchingKey::generate(secret_key_pack, rng)?;

        info!(
            "generated evaluation key: n = {}, N = {}, k = {}, {} bytes in {:?}",
            parameters.lwe_dimension(),
            parameters.ring_dimension(),
            parameters.module_rank(),
            blind_rotation_key.size() + key_switching_key.size(),
            start.elapsed()
        );

        Ok(Self {
            blind_rotation_key,
            key_switching_key,
            parameters,
        })
    }

    /// Complete the bootstrapping operation with LWE Ciphertext *`c`*.
    ///
    /// The output encrypts `mu` if the phase of `c` lies in `(0, 1/2)`,
    /// `-mu` otherwise, under the lwe secret key.
    pub fn bootstrap(&self, c: &Lwe, mu: Torus32) -> Lwe {
        let extracted = self.bootstrap_without_key_switch(c, mu);
        let result = self.key_switching_key.key_switch(&extracted);
        trace!(
            "bootstrap: input variance {:e}, output variance {:e}",
            c.variance(),
            result.variance()
        );
        result
    }

    /// Complete the bootstrapping operation with LWE Ciphertext *`c`*,
    /// leaving the result under the extracted key of dimension `k * N`.
    #[inline]
    pub fn bootstrap_without_key_switch(&self, c: &Lwe, mu: Torus32) -> Lwe {
        self.blind_rotation_key.blind_rotate_and_extract(mu, c)
    }

    /// Switches a sample of the extracted key back to the lwe secret key.
    #[inline]
    pub fn key_switch(&self, c: &Lwe) -> Lwe {
        self.key_switching_key.key_switch(c)
    }

    /// Complete the programmable bootstrapping operation with LWE Ciphertext
    /// *`c`* and lookup table `lut`.
    ///
    /// If `c` encrypts the message `x` of `lut`'s encoder, the output encrypts
    /// the value `lut` holds for `x`.
    ///
    /// # Panics
    ///
    /// Panics if the ring dimension of `lut` differs from `N`.
    pub fn bootstrap_lut(&self, c: &Lwe, lut: &LookUpTable) -> Lwe {
        let extracted = self
            .blind_rotation_key
            .blind_rotate_test_vector_and_extract(lut.polynomial(), c);
        let result = self.key_switching_key.key_switch(&extracted);
        trace!(
            "bootstrap lut: m = {}, input variance {:e}, output variance {:e}",
            lut.message_modulus(),
            c.variance(),
            result.variance()
        );
        result
    }

    /// Evaluates `f: Z_m -> Z_m` on the message of `c` while bootstrapping it.
    ///
    /// Generates the lookup table of `f` first, prefer [`Self::bootstrap_lut`]
    /// when the same function is evaluated many times.
    pub fn bootstrap_func<F>(
        &self,
        c: &Lwe,
        message_modulus: usize,
        f: F,
    ) -> Result<Lwe, FHECoreError>
    where
        F: Fn(usize) -> usize,
    {
        let lut = LookUpTable::generate(self.parameters.ring_dimension(), message_modulus, f)?;
        Ok(self.bootstrap_lut(c, &lut))
    }
}

/// Evaluator
#[derive(Debug, Clone)]
pub struct Evaluator {
    ek: EvaluationKey,
}

impl From<EvaluationKey> for Evaluator {
    #[inline]
    fn from(ek: EvaluationKey) -> Self {
        Self { ek }
    }
}

impl Evaluator {
    /// Create a new instance.
    #[inline]
    pub fn new<R>(sk: &SecretKeyPack, rng: &mut R) -> Result<Self, FHECoreError>
    where
        R: Rng + CryptoRng,
    {
        Ok(Self {
            ek: EvaluationKey::new(sk, rng)?,
        })
    }

    /// Returns a reference to the parameters of this [`Evaluator`].
    #[inline]
    pub fn parameters(&self) -> &Parameters {
        self.ek.parameters()
    }

    /// Returns a reference to the evaluation key of this [`Evaluator`].
    #[inline]
    pub fn evaluation_key(&self) -> &EvaluationKey {
        &self.ek
    }

    /// Complete the bootstrapping operation with LWE Ciphertext *`c`*,
    /// refreshing its noise.
    #[inline]
    pub fn bootstrap(&self, c: &Lwe) -> Lwe {
        self.ek.bootstrap(c, TRUE_MESSAGE)
    }

    /// Generates the [`LookUpTable`] of `f: Z_m -> Z_m` for this evaluator.
    #[inline]
    pub fn lut<F>(&self, message_modulus: usize, f: F) -> Result<LookUpTable, FHECoreError>
    where
        F: Fn(usize) -> usize,
    {
        LookUpTable::generate(self.parameters().ring_dimension(), message_modulus, f)
    }

    /// Performs the programmable bootstrapping of `c` with `lut`.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c`, with message `x` in `Z_m`.
    /// * Output: ciphertext with message `lut(x)`.
    #[inline]
    pub fn bootstrap_lut(&self, c: &Lwe, lut: &LookUpTable) -> Lwe {
        self.ek.bootstrap_lut(c, lut)
    }

    /// Evaluates `f: Z_m -> Z_m` on the message of `c` while bootstrapping it.
    #[inline]
    pub fn bootstrap_func<F>(
        &self,
        c: &Lwe,
        message_modulus: usize,
        f: F,
    ) -> Result<Lwe, FHECoreError>
    where
        F: Fn(usize) -> usize,
    {
        self.ek.bootstrap_func(c, message_modulus, f)
    }

    /// Performs the homomorphic binary operation `gate`.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c0`, with message `a`.
    /// * Input: ciphertext `c1`, with message `b`.
    /// * Output: ciphertext with message `gate(a, b)`.
    pub fn gate(&self, gate: BinaryGate, c0: &Lwe, c1: &Lwe) -> Lwe {
        let (bias, p0, p1) = gate.linear_combination();
        let mut temp = Lwe::noiseless_trivial(self.parameters().lwe_dimension(), bias);
        temp.add_mul_assign(p0, c0);
        temp.add_mul_assign(p1, c1);
        self.bootstrap(&temp)
    }

    /// Performs the homomorphic binary operation `gate` on every pair of `c0` and `c1`.
    ///
    /// The outputs are in the order of the inputs.
    ///
    /// # Panics
    ///
    /// Panics if `c0` and `c1` have different lengths.
    pub fn batch(&self, gate: BinaryGate, c0: &[Lwe], c1: &[Lwe]) -> Vec<Lwe> {
        assert_eq!(c0.len(), c1.len(), "batch length mismatch");
        c0.par_iter()
            .zip(c1.par_iter())
            .map(|(x, y)| self.gate(gate, x, y))
            .collect()
    }

    /// Performs the homomorphic not operation, without bootstrapping.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c`, with message `true`(resp. `false`).
    /// * Output: ciphertext with message `false`(resp. `true`).
    #[inline]
    pub fn not(&self, c: &Lwe) -> Lwe {
        -c
    }

    /// Copies the ciphertext `c`, without bootstrapping.
    #[inline]
    pub fn copy(&self, c: &Lwe) -> Lwe {
        c.clone()
    }

    /// Returns a trivial, noiseless ciphertext of `value`.
    #[inline]
    pub fn constant(&self, value: bool) -> Lwe {
        Lwe::noiseless_trivial(self.parameters().lwe_dimension(), encode(value))
    }

    /// Performs the homomorphic nand operation.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c0`, with message `a`.
    /// * Input: ciphertext `c1`, with message `b`.
    /// * Output: ciphertext with message `not(a and b)`.
    #[inline]
    pub fn nand(&self, c0: &Lwe, c1: &Lwe) -> Lwe {
        self.gate(BinaryGate::Nand, c0, c1)
    }

    /// Performs the homomorphic and operation.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c0`, with message `a`.
    /// * Input: ciphertext `c1`, with message `b`.
    /// * Output: ciphertext with message `a and b`.
    #[inline]
    pub fn and(&self, c0: &Lwe, c1: &Lwe) -> Lwe {
        self.gate(BinaryGate::And, c0, c1)
    }

    /// Performs the homomorphic or operation.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c0`, with message `a`.
    /// * Input: ciphertext `c1`, with message `b`.
    /// * Output: ciphertext with message `a or b`.
    #[inline]
    pub fn or(&self, c0: &Lwe, c1: &Lwe) -> Lwe {
        self.gate(BinaryGate::Or, c0, c1)
    }

    /// Performs the homomorphic nor operation.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c0`, with message `a`.
    /// * Input: ciphertext `c1`, with message `b`.
    /// * Output: ciphertext with message `not(a or b)`.
    #[inline]
    pub fn nor(&self, c0: &Lwe, c1: &Lwe) -> Lwe {
        self.gate(BinaryGate::Nor, c0, c1)
    }

    /// Performs the homomorphic xor operation.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c0`, with message `a`.
    /// * Input: ciphertext `c1`, with message `b`.
    /// * Output: ciphertext with message `a xor b`.
    #[inline]
    pub fn xor(&self, c0: &Lwe, c1: &Lwe) -> Lwe {
        self.gate(BinaryGate::Xor, c0, c1)
    }

    /// Performs the homomorphic xnor operation.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c0`, with message `a`.
    /// * Input: ciphertext `c1`, with message `b`.
    /// * Output: ciphertext with message `not(a xor b)`.
    #[inline]
    pub fn xnor(&self, c0: &Lwe, c1: &Lwe) -> Lwe {
        self.gate(BinaryGate::Xnor, c0, c1)
    }

    /// Performs the homomorphic andny operation.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c0`, with message `a`.
    /// * Input: ciphertext `c1`, with message `b`.
    /// * Output: ciphertext with message `not(a) and b`.
    #[inline]
    pub fn andny(&self, c0: &Lwe, c1: &Lwe) -> Lwe {
        self.gate(BinaryGate::AndNY, c0, c1)
    }

    /// Performs the homomorphic andyn operation.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c0`, with message `a`.
    /// * Input: ciphertext `c1`, with message `b`.
    /// * Output: ciphertext with message `a and not(b)`.
    #[inline]
    pub fn andyn(&self, c0: &Lwe, c1: &Lwe) -> Lwe {
        self.gate(BinaryGate::AndYN, c0, c1)
    }

    /// Performs the homomorphic orny operation.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c0`, with message `a`.
    /// * Input: ciphertext `c1`, with message `b`.
    /// * Output: ciphertext with message `not(a) or b`.
    #[inline]
    pub fn orny(&self, c0: &Lwe, c1: &Lwe) -> Lwe {
        self.gate(BinaryGate::OrNY, c0, c1)
    }

    /// Performs the homomorphic oryn operation.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c0`, with message `a`.
    /// * Input: ciphertext `c1`, with message `b`.
    /// * Output: ciphertext with message `a or not(b)`.
    #[inline]
    pub fn oryn(&self, c0: &Lwe, c1: &Lwe) -> Lwe {
        self.gate(BinaryGate::OrYN, c0, c1)
    }

    /// Performs the homomorphic majority operation.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c0`, with message `a`.
    /// * Input: ciphertext `c1`, with message `b`.
    /// * Input: ciphertext `c2`, with message `c`.
    /// * Output: ciphertext with message `(a & b) | (b & c) | (a & c)`.
    ///     If there are two or three `true`(resp. `false`) in `a`, `b` and `c`, it will return `true`(resp. `false`).
    pub fn majority(&self, c0: &Lwe, c1: &Lwe, c2: &Lwe) -> Lwe {
        // the sum lies in {±1/8, ±3/8}
        let mut add = c0 + c1;
        add += c2;
        self.bootstrap(&add)
    }

    /// Performs the homomorphic mux operation.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c0`, with message `sel`.
    /// * Input: ciphertext `c1`, with message `a`.
    /// * Input: ciphertext `c2`, with message `b`.
    /// * Output: ciphertext with message `if sel {a} else {b}`.
    ///
    /// The two halves are bootstrapped without key switching, summed
    /// under the extracted key and switched once.
    pub fn mux(&self, c0: &Lwe, c1: &Lwe, c2: &Lwe) -> Lwe {
        let n = self.parameters().lwe_dimension();

        // not(sel) and b
        let mut t0 = Lwe::noiseless_trivial(n, FALSE_MESSAGE);
        t0 -= c0;
        t0 += c2;

        // sel and a
        let mut t1 = Lwe::noiseless_trivial(n, FALSE_MESSAGE);
        t1 += c0;
        t1 += c1;

        let (u0, u1) = rayon::join(
            || self.ek.bootstrap_without_key_switch(&t0, TRUE_MESSAGE),
            || self.ek.bootstrap_without_key_switch(&t1, TRUE_MESSAGE),
        );

        // u0 or u1
        let mut u =
            Lwe::noiseless_trivial(self.parameters().extracted_lwe_dimension(), TRUE_MESSAGE);
        u += &u0;
        u += &u1;

        self.ek.key_switch(&u)
    }
}

use algebra::{mod_switch_from_torus, utils::Size, FftProcessor, IntPolynomial};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::{GadgetDecomposition, Tlwe};

mod fourier;

pub use fourier::FourierTgsw;

/// A gadget encoded matrix of [`Tlwe`] samples.
///
/// A [`Tgsw`] sample of module rank `k` with an `l` level [`GadgetDecomposition`]
/// holds `(k + 1) * l` rows. The row `bloc * l + j` is a [`Tlwe`] encryption of
/// zero plus `μ * H[j]` on its polynomial `bloc`, where `μ` is the integer
/// polynomial message and `H` the gadget tower.
///
/// The external product of a [`Tgsw`] encrypting `μ` with a [`Tlwe`]
/// encrypting `m` is a [`Tlwe`] encrypting `μ * m`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tgsw {
    rows: Vec<Tlwe>,
    gadget: GadgetDecomposition,
}

impl Tgsw {
    /// Generates a [`Tgsw`] with all rows `0`.
    pub fn zero(module_rank: usize, coeff_count: usize, gadget: GadgetDecomposition) -> Self {
        let count = (module_rank + 1) * gadget.length();
        Self {
            rows: vec![Tlwe::zero(module_rank, coeff_count); count],
            gadget,
        }
    }

    /// Generates a [`Tgsw`] sample encrypting `0` under `key`.
    pub fn encrypt_zero<R>(
        key: &[IntPolynomial],
        gadget: GadgetDecomposition,
        std_dev: f64,
        fft: &FftProcessor,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + CryptoRng,
    {
        let count = (key.len() + 1) * gadget.length();
        let rows = (0..count)
            .map(|_| Tlwe::encrypt_zero(key, std_dev, fft, rng))
            .collect();
        Self { rows, gadget }
    }

    /// Encrypts the integer `m` under `key`.
    pub fn encrypt_int<R>(
        m: i32,
        key: &[IntPolynomial],
        gadget: GadgetDecomposition,
        std_dev: f64,
        fft: &FftProcessor,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + CryptoRng,
    {
        let mut result = Self::encrypt_zero(key, gadget, std_dev, fft, rng);
        result.add_mu_int_h(m);
        result
    }

    /// Encrypts the integer polynomial `mu` under `key`.
    pub fn encrypt<R>(
        mu: &IntPolynomial,
        key: &[IntPolynomial],
        gadget: GadgetDecomposition,
        std_dev: f64,
        fft: &FftProcessor,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + CryptoRng,
    {
        let mut result = Self::encrypt_zero(key, gadget, std_dev, fft, rng);
        result.add_mu_h(mu);
        result
    }

    /// Adds the gadget matrix `H` itself, the message increases by `1`.
    #[inline]
    pub fn add_h(&mut self) {
        self.add_mu_int_h(1);
    }

    /// Adds `m * H`, the message increases by the integer `m`.
    pub fn add_mu_int_h(&mut self, m: i32) {
        let l = self.gadget.length();
        for bloc in 0..=self.module_rank() {
            for (j, &h) in self.gadget.gadget().iter().enumerate() {
                self.rows[bloc * l + j].add_t_assign(bloc, h.mul_int(m));
            }
        }
    }

    /// Adds `mu * H`, the message increases by the integer polynomial `mu`.
    pub fn add_mu_h(&mut self, mu: &IntPolynomial) {
        let l = self.gadget.length();
        for bloc in 0..=self.module_rank() {
            for (j, &h) in self.gadget.gadget().iter().enumerate() {
                self.rows[bloc * l + j].add_rt_assign(bloc, mu, h);
            }
        }
    }

    /// Recovers the integer polynomial message, each coefficient in `[-Bg/2, Bg/2)`.
    ///
    /// The row `k * l` encrypts `μ * H[0]` on `b`, its phase is rounded to the
    /// closest multiple of `1 / Bg`.
    pub fn decrypt(&self, key: &[IntPolynomial], fft: &FftProcessor) -> IntPolynomial {
        let k = self.module_rank();
        let base = self.gadget.base();
        let half_base = self.gadget.half_base();
        let phase = self.rows[k * self.gadget.length()].phase(key, fft);
        phase
            .iter()
            .map(|&c| {
                let mu = mod_switch_from_torus(c, base as usize) as i32 % base;
                if mu >= half_base {
                    mu - base
                } else {
                    mu
                }
            })
            .collect()
    }

    /// Performs the external product `acc = self ⊡ acc` in the coefficient domain.
    ///
    /// Every polynomial of `acc` is decomposed and each digit multiplies its row.
    /// It gives the same result as [`FourierTgsw::external_product`] with one
    /// inverse transform per product.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn external_product(&self, acc: &mut Tlwe, fft: &FftProcessor) {
        let k = self.module_rank();
        let l = self.gadget.length();
        assert_eq!(acc.module_rank(), k, "module rank mismatch");

        let mut result = Tlwe::zero(k, acc.coeff_count());
        for (bloc, poly) in acc.polys().iter().enumerate() {
            let digits = self.gadget.decompose(poly);
            for (j, digit) in digits.iter().enumerate() {
                let row = &self.rows[bloc * l + j];
                result
                    .polys_mut()
                    .iter_mut()
                    .zip(row.polys())
                    .for_each(|(r, p)| fft.add_mul_assign(r, digit, p));
            }
        }

        let variance = self.external_product_variance(acc.coeff_count());
        result.set_variance(acc.variance() + variance);
        acc.copy_from(&result);
    }

    /// Returns the variance added by an external product with this sample.
    ///
    /// It is `(k+1) * l * N * (Bg/2)^2 * var + (1 + k * N) * ε^2`, `var` being
    /// the noise variance of the rows and `ε` the rounding error of the gadget.
    #[inline]
    pub fn external_product_variance(&self, coeff_count: usize) -> f64 {
        external_product_variance(
            self.module_rank(),
            coeff_count,
            &self.gadget,
            self.variance(),
        )
    }

    /// Returns the module rank `k`.
    #[inline]
    pub fn module_rank(&self) -> usize {
        self.rows[0].module_rank()
    }

    /// Returns the polynomial dimension `N`.
    #[inline]
    pub fn coeff_count(&self) -> usize {
        self.rows[0].coeff_count()
    }

    /// Returns the gadget decomposition of this [`Tgsw`].
    #[inline]
    pub fn gadget(&self) -> &GadgetDecomposition {
        &self.gadget
    }

    /// Returns all the `(k + 1) * l` rows.
    #[inline]
    pub fn rows(&self) -> &[Tlwe] {
        &self.rows
    }

    /// Returns the row encrypting `μ * H[j]` on the polynomial `bloc`.
    #[inline]
    pub fn row(&self, bloc: usize, j: usize) -> &Tlwe {
        &self.rows[bloc * self.gadget.length() + j]
    }

    /// Returns the noise variance of the rows.
    #[inline]
    pub fn variance(&self) -> f64 {
        self.rows[0].variance()
    }
}

impl Size for Tgsw {
    #[inline]
    fn size(&self) -> usize {
        self.rows.size()
    }
}

/// `(k+1) * l * N * (Bg/2)^2 * var + (1 + k * N) * ε^2`.
#[inline]
pub(crate) fn external_product_variance(
    module_rank: usize,
    coeff_count: usize,
    gadget: &GadgetDecomposition,
    variance: f64,
) -> f64 {
    let half_base = gadget.half_base() as f64;
    let rows = ((module_rank + 1) * gadget.length()) as f64;
    rows * coeff_count as f64 * half_base * half_base * variance
        + (1 + module_rank * coeff_count) as f64 * gadget.rounding_variance()
}

#[cfg(test)]
mod tests {
    use algebra::{
        mod_switch_to_torus, random::sample_binary_values, FftProcessor, IntPolynomial,
        TorusPolynomial,
    };
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha12Rng;

    use crate::{GadgetDecomposition, Tgsw, Tlwe};

    fn binary_key(k: usize, n: usize, rng: &mut ChaCha12Rng) -> Vec<IntPolynomial> {
        (0..k)
            .map(|_| IntPolynomial::new(sample_binary_values(n, rng)))
            .collect()
    }

    #[test]
    fn test_encrypt_decrypt() {
        let mut rng = ChaCha12Rng::seed_from_u64(17);
        let n = 256;
        let fft = FftProcessor::new(n).unwrap();
        let key = binary_key(1, n, &mut rng);
        let gadget = GadgetDecomposition::new(3, 7);

        for m in [-3, 0, 1, 5] {
            let c = Tgsw::encrypt_int(m, &key, gadget.clone(), 2f64.powi(-25), &fft, &mut rng);
            assert_eq!(c.rows().len(), 6);
            let mu = c.decrypt(&key, &fft);
            assert_eq!(mu[0], m);
            assert!(mu.iter().skip(1).all(|&x| x == 0));
        }

        let mu: IntPolynomial = (0..n).map(|_| rng.gen_range(-4..4)).collect();
        let c = Tgsw::encrypt(&mu, &key, gadget, 2f64.powi(-25), &fft, &mut rng);
        assert_eq!(c.decrypt(&key, &fft), mu);
    }

    #[test]
    fn test_external_product_by_bit() {
        let mut rng = ChaCha12Rng::seed_from_u64(18);
        let n = 512;
        let fft = FftProcessor::new(n).unwrap();
        let key = binary_key(1, n, &mut rng);
        let gadget = GadgetDecomposition::new(3, 7);

        let mu: TorusPolynomial = (0..n)
            .map(|_| mod_switch_to_torus(rng.gen_range(0..8), 8))
            .collect();
        let acc = Tlwe::encrypt(&mu, &key, 2f64.powi(-25), &fft, &mut rng);

        for bit in [0, 1] {
            let c = Tgsw::encrypt_int(bit, &key, gadget.clone(), 2f64.powi(-25), &fft, &mut rng);
            let mut product = acc.clone();
            c.external_product(&mut product, &fft);
            let expect = if bit == 1 {
                mu.clone()
            } else {
                TorusPolynomial::zero(n)
            };
            assert_eq!(product.decrypt(&key, 8, &fft), expect, "bit = {bit}");
            assert!(product.variance() > acc.variance());
        }
    }
}

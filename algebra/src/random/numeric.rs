use rand::distributions::Standard;
use rand::{CryptoRng, Rng};
use rand_distr::{Distribution, Normal};

use crate::{AlgebraError, Torus32};

/// Sample a binary vector whose values are `0` or `1`.
pub fn sample_binary_values<R>(length: usize, rng: &mut R) -> Vec<i32>
where
    R: Rng + CryptoRng,
{
    let mut v = vec![0i32; length];
    let mut iter = v.chunks_exact_mut(32);
    for chunk in &mut iter {
        let mut r = rng.next_u32();
        for elem in chunk.iter_mut() {
            *elem = (r & 0b1) as i32;
            r >>= 1;
        }
    }
    let mut r = rng.next_u32();
    for elem in iter.into_remainder() {
        *elem = (r & 0b1) as i32;
        r >>= 1;
    }
    v
}

/// Sample a vector of uniformly distributed torus values.
#[inline]
pub fn sample_uniform_torus_values<R>(length: usize, rng: &mut R) -> Vec<Torus32>
where
    R: Rng + CryptoRng,
{
    Standard.sample_iter(rng).take(length).collect()
}

/// The gaussian distribution `N(mean, std_dev**2)` over the torus.
///
/// `mean` and `std_dev` are given as fractions of the torus, the sampled real
/// value is mapped onto [`Torus32`] with [`Torus32::from_f64`].
#[derive(Clone, Copy, Debug)]
pub struct TorusGaussian {
    normal: Normal<f64>,
}

impl TorusGaussian {
    /// Construct, from mean and standard deviation
    ///
    /// Parameters:
    ///
    /// -   mean (`μ`, unrestricted)
    /// -   standard deviation (`σ`, must be finite and non-negative)
    #[inline]
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, AlgebraError> {
        if !std_dev.is_finite() || std_dev < 0. {
            return Err(AlgebraError::DistributionErr);
        }
        Normal::new(mean, std_dev)
            .map(|normal| Self { normal })
            .map_err(|_| AlgebraError::DistributionErr)
    }

    /// Returns the mean (`μ`) of the distribution.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.normal.mean()
    }

    /// Returns the standard deviation (`σ`) of the distribution.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.normal.std_dev()
    }

    /// Returns the variance (`σ²`) of the distribution.
    #[inline]
    pub fn variance(&self) -> f64 {
        let std_dev = self.normal.std_dev();
        std_dev * std_dev
    }

    /// Samples a real value, before it is mapped onto the torus.
    #[inline]
    pub fn sample_f64<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.normal.sample(rng)
    }
}

impl Distribution<Torus32> for TorusGaussian {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Torus32 {
        Torus32::from_f64(self.normal.sample(rng))
    }
}

/// Returns `message + e` where `e` follows `N(0, std_dev**2)` on the torus.
///
/// # Panics
///
/// Panics if `std_dev` is negative or not finite.
#[inline]
pub fn gaussian_t32<R: Rng + ?Sized>(message: Torus32, std_dev: f64, rng: &mut R) -> Torus32 {
    assert!(
        std_dev.is_finite() && std_dev >= 0.,
        "invalid standard deviation {std_dev}"
    );
    if std_dev == 0. {
        return message;
    }
    let e: f64 = Normal::new(0., std_dev)
        .map(|normal| normal.sample(rng))
        .unwrap_or(0.);
    message + Torus32::from_f64(e)
}

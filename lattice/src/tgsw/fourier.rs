use algebra::{utils::Size, FftProcessor};

use crate::{utils::ExternalProductSpace, FourierTlwe, GadgetDecomposition, Tlwe};

use super::{external_product_variance, Tgsw};

/// A [`Tgsw`] sample whose rows are held in the frequency domain.
///
/// This is the form used by the blind rotation: the rows are transformed once,
/// then every external product costs `(k + 1) * l` forward transforms of the
/// digits and `k + 1` inverse transforms.
#[derive(Debug, Clone)]
pub struct FourierTgsw {
    rows: Vec<FourierTlwe>,
    gadget: GadgetDecomposition,
    variance: f64,
}

impl FourierTgsw {
    /// Transforms a [`Tgsw`] into the frequency domain.
    pub fn from_tgsw(tgsw: &Tgsw, fft: &FftProcessor) -> Self {
        Self {
            rows: tgsw
                .rows()
                .iter()
                .map(|row| FourierTlwe::from_tlwe(row, fft))
                .collect(),
            gadget: tgsw.gadget().clone(),
            variance: tgsw.variance(),
        }
    }

    /// Returns the module rank `k`.
    #[inline]
    pub fn module_rank(&self) -> usize {
        self.rows[0].module_rank()
    }

    /// Returns the gadget decomposition of this [`FourierTgsw`].
    #[inline]
    pub fn gadget(&self) -> &GadgetDecomposition {
        &self.gadget
    }

    /// Returns all the `(k + 1) * l` rows.
    #[inline]
    pub fn rows(&self) -> &[FourierTlwe] {
        &self.rows
    }

    /// Returns the noise variance of the rows.
    #[inline]
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Performs the external product `acc = self ⊡ acc` with preallocated scratch space.
    ///
    /// The variance of `acc` grows by
    /// `(k+1) * l * N * (Bg/2)^2 * var + (1 + k * N) * ε^2`.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn external_product_inplace(
        &self,
        acc: &mut Tlwe,
        fft: &FftProcessor,
        space: &mut ExternalProductSpace,
    ) {
        let l = self.gadget.length();
        assert_eq!(acc.module_rank(), self.module_rank(), "module rank mismatch");

        let ExternalProductSpace {
            decompose_space,
            fourier_space,
            accumulator,
        } = space;

        accumulator.set_zero();
        for (bloc, poly) in acc.polys().iter().enumerate() {
            self.gadget.decompose_inplace(poly, decompose_space);
            for (digit, row) in decompose_space.iter().zip(&self.rows[bloc * l..(bloc + 1) * l]) {
                fft.forward_int(digit, fourier_space);
                accumulator.add_mul_assign(fourier_space, row);
            }
        }
        accumulator.inverse_into_inplace(acc, fft);

        let variance = acc.variance() + self.external_product_variance(acc.coeff_count());
        acc.set_variance(variance);
    }

    /// Returns the variance added by an external product with this sample.
    #[inline]
    pub fn external_product_variance(&self, coeff_count: usize) -> f64 {
        external_product_variance(self.module_rank(), coeff_count, &self.gadget, self.variance)
    }

    /// Performs the external product `acc = self ⊡ acc`.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    #[inline]
    pub fn external_product(&self, acc: &mut Tlwe, fft: &FftProcessor) {
        let mut space =
            ExternalProductSpace::new(self.module_rank(), self.gadget.length(), acc.coeff_count());
        self.external_product_inplace(acc, fft, &mut space);
    }
}

impl Size for FourierTgsw {
    #[inline]
    fn size(&self) -> usize {
        self.rows.size()
    }
}

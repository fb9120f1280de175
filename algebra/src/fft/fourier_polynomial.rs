/// A polynomial modulo `X^N + 1` in the frequency domain.
///
/// It holds `N / 2` complex evaluations stored as two blocks of floats, the
/// real parts followed by the imaginary parts. The slot order is the one left
/// by [`FftProcessor`](super::FftProcessor), it is opaque to callers: two
/// [`FourierPolynomial`]s produced by the same processor can be combined
/// pointwise, nothing else should be assumed.
#[derive(Clone, Debug, PartialEq)]
pub struct FourierPolynomial {
    data: Vec<f64>,
}

impl FourierPolynomial {
    /// Creates the frequency representation of the zero polynomial of `coeff_count` coefficients.
    #[inline]
    pub fn zero(coeff_count: usize) -> Self {
        Self {
            data: vec![0.0; coeff_count],
        }
    }

    /// Returns the coefficient count `N` of the represented polynomial.
    #[inline]
    pub fn coeff_count(&self) -> usize {
        self.data.len()
    }

    /// Returns the real and imaginary blocks.
    #[inline]
    pub fn re_im(&self) -> (&[f64], &[f64]) {
        self.data.split_at(self.data.len() >> 1)
    }

    /// Returns the mutable real and imaginary blocks.
    #[inline]
    pub fn re_im_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        let half = self.data.len() >> 1;
        self.data.split_at_mut(half)
    }

    /// Sets `self` to `0`.
    #[inline]
    pub fn set_zero(&mut self) {
        self.data.fill(0.0);
    }

    /// Copy the values from another [`FourierPolynomial`].
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ.
    #[inline]
    pub fn copy_from(&mut self, src: &Self) {
        assert_eq!(self.coeff_count(), src.coeff_count(), "degree mismatch");
        self.data.copy_from_slice(&src.data);
    }

    /// Performs `self += rhs` pointwise.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ.
    #[inline]
    pub fn add_assign(&mut self, rhs: &Self) {
        assert_eq!(self.coeff_count(), rhs.coeff_count(), "degree mismatch");
        self.data
            .iter_mut()
            .zip(rhs.data.iter())
            .for_each(|(a, b)| *a += b);
    }

    /// Performs `self -= rhs` pointwise.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ.
    #[inline]
    pub fn sub_assign(&mut self, rhs: &Self) {
        assert_eq!(self.coeff_count(), rhs.coeff_count(), "degree mismatch");
        self.data
            .iter_mut()
            .zip(rhs.data.iter())
            .for_each(|(a, b)| *a -= b);
    }

    /// Performs `self *= rhs` pointwise, the complex product.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ.
    pub fn mul_assign(&mut self, rhs: &Self) {
        assert_eq!(self.coeff_count(), rhs.coeff_count(), "degree mismatch");
        let (rr, ri) = rhs.re_im();
        let (sr, si) = self.re_im_mut();
        for (((ar, ai), &br), &bi) in sr.iter_mut().zip(si.iter_mut()).zip(rr).zip(ri) {
            let re = *ar * br - *ai * bi;
            let im = *ar * bi + *ai * br;
            *ar = re;
            *ai = im;
        }
    }

    /// Performs `self += a * b` pointwise, the complex multiply-accumulate.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ.
    pub fn add_mul_assign(&mut self, a: &Self, b: &Self) {
        assert_eq!(self.coeff_count(), a.coeff_count(), "degree mismatch");
        assert_eq!(self.coeff_count(), b.coeff_count(), "degree mismatch");
        let (ar, ai) = a.re_im();
        let (br, bi) = b.re_im();
        let (sr, si) = self.re_im_mut();
        for j in 0..sr.len() {
            sr[j] += ar[j] * br[j] - ai[j] * bi[j];
            si[j] += ar[j] * bi[j] + ai[j] * br[j];
        }
    }

    /// Returns `a * b` pointwise.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ.
    #[inline]
    pub fn mul(a: &Self, b: &Self) -> Self {
        let mut result = a.clone();
        result.mul_assign(b);
        result
    }
}

use std::sync::Arc;

use crate::utils::Pool;
use crate::{AlgebraError, FftTable, FourierPolynomial, IntPolynomial, Torus32, TorusPolynomial};

/// Negacyclic fft processor for polynomials modulo `X^N + 1`.
///
/// The pre-computed [`FftTable`] is read-only and shared, the processor adds a
/// pool of scratch buffers. A processor can be used from several threads at
/// once, [`FftProcessor::shallow_copy`] gives a processor with the same tables
/// and its own buffers when the pool should not be shared.
#[derive(Debug, Clone)]
pub struct FftProcessor {
    table: Arc<FftTable>,
    pool: Pool<FourierPolynomial>,
}

impl FftProcessor {
    /// Creates a new [`FftProcessor`] for polynomials of `n` coefficients.
    pub fn new(n: usize) -> Result<Self, AlgebraError> {
        let table = FftTable::new(n)?;
        Ok(Self {
            table: Arc::new(table),
            pool: Pool::new_with(2, || FourierPolynomial::zero(n)),
        })
    }

    /// Returns a processor sharing the tables of `self`, with independent scratch buffers.
    #[inline]
    pub fn shallow_copy(&self) -> Self {
        let n = self.dimension();
        Self {
            table: Arc::clone(&self.table),
            pool: Pool::new_with(2, || FourierPolynomial::zero(n)),
        }
    }

    /// Returns the polynomial dimension `N`.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.table.dimension()
    }

    /// Returns a reference to the table of this [`FftProcessor`].
    #[inline]
    pub fn table(&self) -> &FftTable {
        &self.table
    }

    #[inline]
    fn check_dimension(&self, coeff_count: usize) {
        assert_eq!(
            coeff_count,
            self.dimension(),
            "polynomial dimension does not match the fft dimension"
        );
    }

    /// Transforms an integer polynomial into `dst`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ from the processor's.
    pub fn forward_int(&self, poly: &IntPolynomial, dst: &mut FourierPolynomial) {
        self.check_dimension(poly.coeff_count());
        self.check_dimension(dst.coeff_count());
        let coeffs = poly.as_slice();
        let (re, im) = dst.re_im_mut();
        self.table.twist(|j| coeffs[j] as f64, re, im);
        self.table.transform_inplace(re, im);
    }

    /// Transforms a torus polynomial into `dst`.
    ///
    /// Each coefficient is lifted to its representative in `[-2^31, 2^31)`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ from the processor's.
    pub fn forward_torus(&self, poly: &TorusPolynomial, dst: &mut FourierPolynomial) {
        self.check_dimension(poly.coeff_count());
        self.check_dimension(dst.coeff_count());
        let coeffs = poly.as_slice();
        let (re, im) = dst.re_im_mut();
        self.table.twist(|j| coeffs[j].inner() as f64, re, im);
        self.table.transform_inplace(re, im);
    }

    /// Writes the transform of the monomial `X^a` into `dst`, in `O(N)`.
    ///
    /// # Panics
    ///
    /// Panics if the dimension of `dst` differs from the processor's.
    pub fn forward_monomial(&self, a: usize, dst: &mut FourierPolynomial) {
        self.check_dimension(dst.coeff_count());
        let (re, im) = dst.re_im_mut();
        self.table.monomial(a, re, im);
    }

    /// Returns the transform of an integer polynomial.
    #[inline]
    pub fn transform_int(&self, poly: &IntPolynomial) -> FourierPolynomial {
        let mut dst = FourierPolynomial::zero(self.dimension());
        self.forward_int(poly, &mut dst);
        dst
    }

    /// Returns the transform of a torus polynomial.
    #[inline]
    pub fn transform_torus(&self, poly: &TorusPolynomial) -> FourierPolynomial {
        let mut dst = FourierPolynomial::zero(self.dimension());
        self.forward_torus(poly, &mut dst);
        dst
    }

    /// Inverse transforms `src` into the torus polynomial `dst`, reusing `src` as scratch.
    ///
    /// Every coefficient is rounded to the nearest integer and reduced modulo `2^32`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ from the processor's.
    pub fn inverse_torus_inplace(&self, src: &mut FourierPolynomial, dst: &mut TorusPolynomial) {
        self.check_dimension(src.coeff_count());
        self.check_dimension(dst.coeff_count());
        let (re, im) = src.re_im_mut();
        self.table.inverse_transform_inplace(re, im);
        let out = dst.as_mut_slice();
        self.table
            .untwist(re, im, |j, v| out[j] = Torus32::new(round_to_i32(v)));
    }

    /// Inverse transforms `src` and adds the result to `dst`, reusing `src` as scratch.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ from the processor's.
    pub fn inverse_torus_add_inplace(
        &self,
        src: &mut FourierPolynomial,
        dst: &mut TorusPolynomial,
    ) {
        self.check_dimension(src.coeff_count());
        self.check_dimension(dst.coeff_count());
        let (re, im) = src.re_im_mut();
        self.table.inverse_transform_inplace(re, im);
        let out = dst.as_mut_slice();
        self.table
            .untwist(re, im, |j, v| out[j] += Torus32::new(round_to_i32(v)));
    }

    /// Inverse transforms `src` into the torus polynomial `dst`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ from the processor's.
    pub fn inverse_torus(&self, src: &FourierPolynomial, dst: &mut TorusPolynomial) {
        let mut scratch = self.scratch();
        scratch.copy_from(src);
        self.inverse_torus_inplace(&mut scratch, dst);
        self.pool.store(scratch);
    }

    /// Inverse transforms `src` into the integer polynomial `dst`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ from the processor's.
    pub fn inverse_int(&self, src: &FourierPolynomial, dst: &mut IntPolynomial) {
        self.check_dimension(dst.coeff_count());
        let mut scratch = self.scratch();
        scratch.copy_from(src);
        let (re, im) = scratch.re_im_mut();
        self.table.inverse_transform_inplace(re, im);
        let out = dst.as_mut_slice();
        self.table.untwist(re, im, |j, v| out[j] = round_to_i32(v));
        self.pool.store(scratch);
    }

    /// Returns the product `poly1 * poly2` modulo `X^N + 1`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ from the processor's.
    pub fn mul(&self, poly1: &IntPolynomial, poly2: &TorusPolynomial) -> TorusPolynomial {
        let mut result = TorusPolynomial::zero(self.dimension());
        self.add_mul_assign(&mut result, poly1, poly2);
        result
    }

    /// Performs `dst += poly1 * poly2` modulo `X^N + 1`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ from the processor's.
    pub fn add_mul_assign(
        &self,
        dst: &mut TorusPolynomial,
        poly1: &IntPolynomial,
        poly2: &TorusPolynomial,
    ) {
        let mut a = self.scratch();
        let mut b = self.scratch();
        self.forward_int(poly1, &mut a);
        self.forward_torus(poly2, &mut b);
        a.mul_assign(&b);
        self.inverse_torus_add_inplace(&mut a, dst);
        self.pool.store(a);
        self.pool.store(b);
    }

    /// Performs `dst -= poly1 * poly2` modulo `X^N + 1`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ from the processor's.
    pub fn sub_mul_assign(
        &self,
        dst: &mut TorusPolynomial,
        poly1: &IntPolynomial,
        poly2: &TorusPolynomial,
    ) {
        let product = self.mul(poly1, poly2);
        dst.sub_assign_element_wise(&product);
    }

    #[inline]
    fn scratch(&self) -> FourierPolynomial {
        self.pool
            .get()
            .unwrap_or_else(|| FourierPolynomial::zero(self.dimension()))
    }
}

/// Rounds to the nearest integer and reduces modulo `2^32`.
#[inline]
fn round_to_i32(v: f64) -> i32 {
    v.round() as i64 as i32
}

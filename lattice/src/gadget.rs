use algebra::{IntPolynomial, Torus32, TorusPolynomial};
use serde::{Deserialize, Serialize};

/// The signed gadget decomposition in base `Bg = 2^bg_bit` with `l` levels.
///
/// The gadget tower is `H[j] = 2^(32 - (j+1) * bg_bit)` as a torus value, that
/// is `1 / Bg^(j+1)`. A torus value `x` is split into digits `d_j` in
/// `[-Bg/2, Bg/2)` with `Σ d_j * H[j] ≈ x`.
///
/// Adding `offset = Σ (Bg/2) * H[j]` before extracting the bits and removing
/// `Bg/2` from every digit afterwards centers the digits. The bits below
/// `H[l-1]` are dropped, so `x - Σ d_j * H[j]` lies in `[0, H[l-1])`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GadgetDecomposition {
    length: usize,
    base_bits: u32,
    base: i32,
    half_base: i32,
    mask: u32,
    offset: u32,
    gadget: Vec<Torus32>,
}

impl GadgetDecomposition {
    /// Creates a new [`GadgetDecomposition`] of `length` levels in base `2^base_bits`.
    ///
    /// # Panics
    ///
    /// Panics if `length` or `base_bits` is `0`, or if `length * base_bits > 32`.
    pub fn new(length: usize, base_bits: u32) -> Self {
        assert!(length > 0 && base_bits > 0, "empty gadget decomposition");
        assert!(
            length as u32 * base_bits <= 32,
            "gadget decomposition exceeds 32 bits"
        );

        let base = 1i64 << base_bits;
        let half_base = base >> 1;

        let gadget: Vec<Torus32> = (0..length as u32)
            .map(|j| Torus32::from_bits((1u64 << (32 - (j + 1) * base_bits)) as u32))
            .collect();

        let offset = (0..length as u32).fold(0u32, |acc, j| {
            acc.wrapping_add((half_base as u64 * (1u64 << (32 - (j + 1) * base_bits))) as u32)
        });

        Self {
            length,
            base_bits,
            base: base as i32,
            half_base: half_base as i32,
            mask: (base - 1) as u32,
            offset,
            gadget,
        }
    }

    /// Returns the number of levels `l`.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the log of the base, `bg_bit`.
    #[inline]
    pub fn base_bits(&self) -> u32 {
        self.base_bits
    }

    /// Returns the base `Bg`.
    #[inline]
    pub fn base(&self) -> i32 {
        self.base
    }

    /// Returns `Bg / 2`.
    #[inline]
    pub fn half_base(&self) -> i32 {
        self.half_base
    }

    /// Returns `Bg - 1`.
    #[inline]
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Returns the rounding offset.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns the gadget tower `H`.
    #[inline]
    pub fn gadget(&self) -> &[Torus32] {
        &self.gadget
    }

    /// Returns the bound `2^(32 - l * bg_bit)` of the reconstruction error, as a raw torus value.
    ///
    /// The error `x - Σ d_j * H[j]` is always smaller than this bound.
    #[inline]
    pub fn precision(&self) -> u64 {
        1 << (32 - self.length as u32 * self.base_bits)
    }

    /// Returns `ε^2` with `ε = 2^(-l * bg_bit) / 2`, the variance bound of the rounding error.
    #[inline]
    pub fn rounding_variance(&self) -> f64 {
        let epsilon = 2f64.powi(-((self.length as u32 * self.base_bits) as i32)) / 2.;
        epsilon * epsilon
    }

    /// Decomposes a single torus value into `digits`.
    ///
    /// # Panics
    ///
    /// Panics if `digits.len()` differs from the length.
    #[inline]
    pub fn decompose_value(&self, value: Torus32, digits: &mut [i32]) {
        assert_eq!(digits.len(), self.length, "decomposition length mismatch");
        let tmp = value.to_bits().wrapping_add(self.offset);
        for (j, d) in digits.iter_mut().enumerate() {
            let shift = 32 - (j as u32 + 1) * self.base_bits;
            *d = ((tmp >> shift) & self.mask) as i32 - self.half_base;
        }
    }

    /// Decomposes the torus polynomial `poly` into `destination`, one integer polynomial per level.
    ///
    /// # Panics
    ///
    /// Panics if `destination.len()` differs from the length, or if the degrees differ.
    pub fn decompose_inplace(&self, poly: &TorusPolynomial, destination: &mut [IntPolynomial]) {
        assert_eq!(
            destination.len(),
            self.length,
            "decomposition length mismatch"
        );
        let n = poly.coeff_count();
        for (j, d) in destination.iter_mut().enumerate() {
            assert_eq!(d.coeff_count(), n, "degree mismatch");
            let shift = 32 - (j as u32 + 1) * self.base_bits;
            for (di, &pi) in d.iter_mut().zip(poly.iter()) {
                let tmp = pi.to_bits().wrapping_add(self.offset);
                *di = ((tmp >> shift) & self.mask) as i32 - self.half_base;
            }
        }
    }

    /// Decomposes the torus polynomial `poly`.
    #[inline]
    pub fn decompose(&self, poly: &TorusPolynomial) -> Vec<IntPolynomial> {
        let mut destination = vec![IntPolynomial::zero(poly.coeff_count()); self.length];
        self.decompose_inplace(poly, &mut destination);
        destination
    }

    /// Returns `Σ digits_j * H[j]`.
    ///
    /// # Panics
    ///
    /// Panics if `digits.len()` differs from the length.
    pub fn reconstruct(&self, digits: &[IntPolynomial]) -> TorusPolynomial {
        assert_eq!(digits.len(), self.length, "decomposition length mismatch");
        let n = digits[0].coeff_count();
        let mut result = TorusPolynomial::zero(n);
        for (d, &h) in digits.iter().zip(self.gadget.iter()) {
            for (r, &di) in result.iter_mut().zip(d.iter()) {
                *r += h.mul_int(di);
            }
        }
        result
    }
}

//! Lookup tables of the programmable bootstrapping.
//!
//! A message `x` of `Z_m` is encoded as `x / 2m`, so that every message lies
//! in the half torus `[0, 1/2)`. The blind rotation by such a phase reads one
//! box of the test polynomial, which is filled with the encoded `f(x)`.

use algebra::{mod_switch_from_torus, mod_switch_to_torus, Torus32, TorusPolynomial};

use crate::FHECoreError;

/// Encodes messages of `Z_m` into the half torus, `x -> x / 2m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LutEncoder {
    message_modulus: usize,
}

impl LutEncoder {
    /// Creates a new [`LutEncoder`] for messages in `[0, message_modulus)`.
    #[inline]
    pub fn new(message_modulus: usize) -> Result<Self, FHECoreError> {
        if message_modulus < 2 || message_modulus > i32::MAX as usize {
            return Err(FHECoreError::MessageModulusUnValid(message_modulus));
        }
        Ok(Self { message_modulus })
    }

    /// Returns the message modulus `m`.
    #[inline]
    pub fn message_modulus(&self) -> usize {
        self.message_modulus
    }

    /// Encodes `message mod m` as `(message mod m) / 2m`.
    #[inline]
    pub fn encode(&self, message: usize) -> Torus32 {
        let message = message % self.message_modulus;
        mod_switch_to_torus(message as i32, self.message_modulus << 1)
    }

    /// Rounds `phase` to the closest encoded message.
    #[inline]
    pub fn decode(&self, phase: Torus32) -> usize {
        mod_switch_from_torus(phase, self.message_modulus << 1) % self.message_modulus
    }
}

/// A test polynomial evaluating a function of `Z_m` during the blind rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookUpTable {
    polynomial: TorusPolynomial,
    encoder: LutEncoder,
}

impl LookUpTable {
    /// Generates the [`LookUpTable`] of `f: Z_m -> Z_m`, outputs encoded by the
    /// same [`LutEncoder`] as the inputs.
    #[inline]
    pub fn generate<F>(
        ring_dimension: usize,
        message_modulus: usize,
        f: F,
    ) -> Result<Self, FHECoreError>
    where
        F: Fn(usize) -> usize,
    {
        let encoder = LutEncoder::new(message_modulus)?;
        Self::generate_torus(ring_dimension, message_modulus, |x| encoder.encode(f(x)))
    }

    /// Generates the [`LookUpTable`] whose box of message `x` holds the torus
    /// value `f(x)`.
    ///
    /// The box of `x` covers `[x * N / m, (x + 1) * N / m)` before it is shifted
    /// left by half a box, so that every message sits in the middle of its box.
    /// The coefficients shifted past `X^N` wrap around negated.
    pub fn generate_torus<F>(
        ring_dimension: usize,
        message_modulus: usize,
        f: F,
    ) -> Result<Self, FHECoreError>
    where
        F: Fn(usize) -> Torus32,
    {
        if !ring_dimension.is_power_of_two() || ring_dimension < 2 {
            return Err(FHECoreError::RingDimensionUnValid(ring_dimension));
        }
        let encoder = LutEncoder::new(message_modulus)?;
        if message_modulus > ring_dimension >> 1 {
            return Err(FHECoreError::MessageModulusUnValid(message_modulus));
        }

        let n = ring_dimension;
        let m = message_modulus;

        let mut boxes = vec![Torus32::ZERO; n];
        for x in 0..m {
            let start = div_round(x * n, m);
            let end = div_round((x + 1) * n, m);
            boxes[start..end].fill(f(x));
        }

        let offset = div_round(n, m << 1);
        boxes.rotate_left(offset);
        boxes[n - offset..].iter_mut().for_each(|v| *v = -*v);

        Ok(Self {
            polynomial: TorusPolynomial::new(boxes),
            encoder,
        })
    }

    /// Returns the test polynomial.
    #[inline]
    pub fn polynomial(&self) -> &TorusPolynomial {
        &self.polynomial
    }

    /// Returns the encoder of the input messages.
    #[inline]
    pub fn encoder(&self) -> LutEncoder {
        self.encoder
    }

    /// Returns the message modulus `m`.
    #[inline]
    pub fn message_modulus(&self) -> usize {
        self.encoder.message_modulus
    }

    /// Returns the ring dimension `N`.
    #[inline]
    pub fn ring_dimension(&self) -> usize {
        self.polynomial.coeff_count()
    }
}

#[inline]
fn div_round(a: usize, b: usize) -> usize {
    (a + (b >> 1)) / b
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The constant coefficient of `X^(-phase) * v`, `phase` in `Z_2N`.
    fn rotated_constant(lut: &LookUpTable, phase: usize) -> Torus32 {
        let n = lut.ring_dimension();
        let v = lut.polynomial();
        if phase < n {
            v[phase]
        } else {
            -v[phase - n]
        }
    }

    #[test]
    fn test_encoder() {
        let encoder = LutEncoder::new(4).unwrap();
        assert_eq!(encoder.encode(1), Torus32::new(1 << 29));
        assert_eq!(encoder.encode(6), Torus32::new(1 << 30));
        for x in 0..4 {
            let phase = encoder.encode(x);
            assert_eq!(encoder.decode(phase), x);
            assert_eq!(encoder.decode(phase + Torus32::new(1 << 26)), x);
            assert_eq!(encoder.decode(phase - Torus32::new(1 << 26)), x);
        }
        assert!(LutEncoder::new(1).is_err());
    }

    #[test]
    fn test_lut_boxes() {
        let n = 1024;
        let twice_n = (n << 1) as i64;
        for m in [2usize, 4, 8] {
            let f = |x: usize| (3 * x + 1) % m;
            let lut = LookUpTable::generate(n, m, f).unwrap();
            let encoder = lut.encoder();

            // phases within a quarter box of every message
            let margin = (n / (4 * m)) as i64;
            for x in 0..m {
                let center = (x * n / m) as i64;
                for e in [-margin, -1, 0, 1, margin] {
                    let phase = (center + e).rem_euclid(twice_n) as usize;
                    let value = rotated_constant(&lut, phase);
                    assert_eq!(value, encoder.encode(f(x)), "m = {m}, x = {x}, e = {e}");
                }
            }
        }
    }

    #[test]
    fn test_lut_invalid() {
        assert!(LookUpTable::generate(1000, 4, |x| x).is_err());
        assert!(LookUpTable::generate(16, 9, |x| x).is_err());
        assert!(LookUpTable::generate(16, 1, |x| x).is_err());
        assert!(LookUpTable::generate(16, 8, |x| x).is_ok());
    }
}

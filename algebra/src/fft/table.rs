use std::f64::consts::PI;

use crate::AlgebraError;

/// This struct stores the pre-computed data for the negacyclic fast fourier
/// transform of polynomials modulo `X^N + 1`.
///
/// A real polynomial `p` of `N` coefficients is folded into `m = N / 2` complex
/// values `q_j = (p_j + i * p_{j+m}) * ω^j` with `ω = exp(iπ/N)`, followed by a
/// cyclic transform of length `m`. The result holds `p(ζ_k)` for the `m` roots
/// `ζ_k = ω * exp(-2πik/m)` of `X^N + 1` with `ζ_k^m = i`, the other half being
/// their conjugates.
///
/// ## The structure members meet the following conditions:
///
/// 1. `n = 2 * m`, `m = 1 << log_m`
/// 1. `twist` holds `ω^j` for `j` in `[0, m)`.
/// 1. `untwist` holds `ω^{-j} / m` for `j` in `[0, m)`, the inverse scaling is folded in.
/// 1. `roots` holds `exp(-2πit/m)` for `t` in `[0, m/2)`, stage `len` reads them with stride `m / len`.
/// 1. `monomial_roots` holds `exp(iπt/N)` for `t` in `[0, 2N)`.
/// 1. `slot_exponents[s]` is the `t` such that slot `s` of a transformed polynomial holds `p(exp(iπt/N))`.
///
/// ## Orders
///
/// The forward transform is a decimation in frequency, it leaves its output in
/// bit-reversed order. The inverse transform is a decimation in time consuming
/// bit-reversed input. Pointwise operations do not depend on the order.
///
/// ```plain
/// normal order:        0  1  2  3  4  5  6  7
///
/// bit-reversed order:  0  4  2  6  1  5  3  7
/// ```
#[derive(Debug)]
pub struct FftTable {
    n: usize,
    m: usize,
    log_m: u32,
    twist_re: Vec<f64>,
    twist_im: Vec<f64>,
    untwist_re: Vec<f64>,
    untwist_im: Vec<f64>,
    roots_re: Vec<f64>,
    roots_im: Vec<f64>,
    monomial_roots_re: Vec<f64>,
    monomial_roots_im: Vec<f64>,
    slot_exponents: Vec<usize>,
}

impl FftTable {
    /// Creates a new [`FftTable`] for polynomials of `n` coefficients.
    pub fn new(n: usize) -> Result<Self, AlgebraError> {
        if n < 2 || !n.is_power_of_two() {
            return Err(AlgebraError::FftDimensionErr(n));
        }
        let m = n >> 1;
        let log_m = m.trailing_zeros();
        let n_f64 = n as f64;
        let m_f64 = m as f64;

        let (twist_re, twist_im): (Vec<f64>, Vec<f64>) = (0..m)
            .map(|j| {
                let angle = PI * j as f64 / n_f64;
                (angle.cos(), angle.sin())
            })
            .unzip();

        let (untwist_re, untwist_im): (Vec<f64>, Vec<f64>) = twist_re
            .iter()
            .zip(twist_im.iter())
            .map(|(&c, &s)| (c / m_f64, -s / m_f64))
            .unzip();

        let (roots_re, roots_im): (Vec<f64>, Vec<f64>) = (0..(m >> 1).max(1))
            .map(|t| {
                let angle = -2.0 * PI * t as f64 / m_f64;
                (angle.cos(), angle.sin())
            })
            .unzip();

        let (monomial_roots_re, monomial_roots_im): (Vec<f64>, Vec<f64>) = (0..2 * n)
            .map(|t| {
                let angle = PI * t as f64 / n_f64;
                (angle.cos(), angle.sin())
            })
            .unzip();

        // slot s holds evaluation at ζ_k, k = rev(s), ζ_k = exp(iπ(1 - 4k)/N)
        let twice_n = 2 * n;
        let slot_exponents = (0..m)
            .map(|s| {
                let k = reverse_lsbs(s, log_m);
                (1 + twice_n * 2 - (4 * k) % twice_n) % twice_n
            })
            .collect();

        Ok(Self {
            n,
            m,
            log_m,
            twist_re,
            twist_im,
            untwist_re,
            untwist_im,
            roots_re,
            roots_im,
            monomial_roots_re,
            monomial_roots_im,
            slot_exponents,
        })
    }

    /// Returns the polynomial dimension `N` of this [`FftTable`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Returns the length `m = N / 2` of the complex transform.
    #[inline]
    pub fn half_dimension(&self) -> usize {
        self.m
    }

    /// Returns the log of the length of the complex transform.
    #[inline]
    pub fn log_half_dimension(&self) -> u32 {
        self.log_m
    }

    /// Folds and twists the real coefficients `values` into `re` and `im`.
    #[inline]
    pub(crate) fn twist<I>(&self, values: I, re: &mut [f64], im: &mut [f64])
    where
        I: Fn(usize) -> f64,
    {
        let m = self.m;
        for j in 0..m {
            let lo = values(j);
            let hi = values(j + m);
            let (c, s) = (self.twist_re[j], self.twist_im[j]);
            re[j] = lo * c - hi * s;
            im[j] = lo * s + hi * c;
        }
    }

    /// Untwists `re` and `im`, scales by `1/m` and hands every real coefficient to `sink`.
    #[inline]
    pub(crate) fn untwist<S>(&self, re: &[f64], im: &[f64], mut sink: S)
    where
        S: FnMut(usize, f64),
    {
        let m = self.m;
        for j in 0..m {
            let (c, s) = (self.untwist_re[j], self.untwist_im[j]);
            let (xr, xi) = (re[j], im[j]);
            sink(j, xr * c - xi * s);
            sink(j + m, xr * s + xi * c);
        }
    }

    /// Forward cyclic transform of length `m`, output in bit-reversed order.
    pub(crate) fn transform_inplace(&self, re: &mut [f64], im: &mut [f64]) {
        debug_assert_eq!(re.len(), self.m);
        debug_assert_eq!(im.len(), self.m);

        let m = self.m;
        let mut len = m;
        while len >= 2 {
            let half = len >> 1;
            let stride = m / len;
            for start in (0..m).step_by(len) {
                for k in 0..half {
                    let (wr, wi) = (self.roots_re[k * stride], self.roots_im[k * stride]);
                    let i0 = start + k;
                    let i1 = i0 + half;
                    let (ur, ui) = (re[i0], im[i0]);
                    let (vr, vi) = (re[i1], im[i1]);
                    re[i0] = ur + vr;
                    im[i0] = ui + vi;
                    let (dr, di) = (ur - vr, ui - vi);
                    re[i1] = dr * wr - di * wi;
                    im[i1] = dr * wi + di * wr;
                }
            }
            len = half;
        }
    }

    /// Inverse cyclic transform of length `m`, input in bit-reversed order.
    ///
    /// The `1/m` scaling is left to [`FftTable::untwist`].
    pub(crate) fn inverse_transform_inplace(&self, re: &mut [f64], im: &mut [f64]) {
        debug_assert_eq!(re.len(), self.m);
        debug_assert_eq!(im.len(), self.m);

        let m = self.m;
        let mut len = 2;
        while len <= m {
            let half = len >> 1;
            let stride = m / len;
            for start in (0..m).step_by(len) {
                for k in 0..half {
                    let (wr, wi) = (self.roots_re[k * stride], self.roots_im[k * stride]);
                    let i0 = start + k;
                    let i1 = i0 + half;
                    let (xr, xi) = (re[i1], im[i1]);
                    let vr = xr * wr + xi * wi;
                    let vi = xi * wr - xr * wi;
                    let (ur, ui) = (re[i0], im[i0]);
                    re[i0] = ur + vr;
                    im[i0] = ui + vi;
                    re[i1] = ur - vr;
                    im[i1] = ui - vi;
                }
            }
            len <<= 1;
        }
    }

    /// Writes the transform of the monomial `X^a` into `re` and `im`, in `O(N)`.
    pub(crate) fn monomial(&self, a: usize, re: &mut [f64], im: &mut [f64]) {
        let twice_n = 2 * self.n;
        let a = a % twice_n;
        for ((r, i), &t) in re.iter_mut().zip(im.iter_mut()).zip(&self.slot_exponents) {
            let e = (a * t) % twice_n;
            *r = self.monomial_roots_re[e];
            *i = self.monomial_roots_im[e];
        }
    }
}

/// Reverses the `bits` least significant bits of `x`.
#[inline]
fn reverse_lsbs(x: usize, bits: u32) -> usize {
    if bits == 0 {
        0
    } else {
        x.reverse_bits() >> (usize::BITS - bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rejects_bad_dimension() {
        assert!(FftTable::new(0).is_err());
        assert!(FftTable::new(1).is_err());
        assert!(FftTable::new(48).is_err());
        assert!(FftTable::new(2).is_ok());
        assert!(FftTable::new(1024).is_ok());
    }

    #[test]
    fn test_reverse_lsbs() {
        let order: Vec<usize> = (0..8).map(|x| reverse_lsbs(x, 3)).collect();
        assert_eq!(order, vec![0, 4, 2, 6, 1, 5, 3, 7]);
        assert_eq!(reverse_lsbs(0, 0), 0);
    }

    #[test]
    fn test_cyclic_round_trip() {
        let table = FftTable::new(32).unwrap();
        let m = table.half_dimension();
        let orig_re: Vec<f64> = (0..m).map(|x| x as f64 - 3.0).collect();
        let orig_im: Vec<f64> = (0..m).map(|x| (x * x) as f64).collect();
        let mut re = orig_re.clone();
        let mut im = orig_im.clone();
        table.transform_inplace(&mut re, &mut im);
        table.inverse_transform_inplace(&mut re, &mut im);
        for j in 0..m {
            assert!((re[j] / m as f64 - orig_re[j]).abs() < 1e-9);
            assert!((im[j] / m as f64 - orig_im[j]).abs() < 1e-9);
        }
    }
}

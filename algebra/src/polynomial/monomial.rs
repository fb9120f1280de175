use super::{Coefficient, Polynomial};

impl<T: Coefficient> Polynomial<T> {
    /// Computes `dst = X^a * self` modulo `X^N + 1` for `a` in `[0, 2N)`.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ or `a >= 2N`.
    pub fn mul_by_x_ai_into(&self, a: usize, dst: &mut Self) {
        let n = self.coeff_count();
        assert_eq!(n, dst.coeff_count(), "degree mismatch");
        assert!(a < 2 * n, "monomial exponent {a} out of range [0, {})", 2 * n);

        let src = self.as_slice();
        let out = dst.as_mut_slice();
        if a < n {
            for (o, &s) in out[..a].iter_mut().zip(&src[n - a..]) {
                *o = s.wrapping_neg();
            }
            out[a..].copy_from_slice(&src[..n - a]);
        } else {
            let aa = a - n;
            out[..aa].copy_from_slice(&src[n - aa..]);
            for (o, &s) in out[aa..].iter_mut().zip(&src[..n - aa]) {
                *o = s.wrapping_neg();
            }
        }
    }

    /// Computes `dst = (X^a - 1) * self` modulo `X^N + 1` for `a` in `[0, 2N)`.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ or `a >= 2N`.
    pub fn mul_by_x_ai_minus_one_into(&self, a: usize, dst: &mut Self) {
        self.mul_by_x_ai_into(a, dst);
        dst.iter_mut()
            .zip(self.iter())
            .for_each(|(d, &s)| *d = d.wrapping_sub(s));
    }

    /// Returns `X^a * self` modulo `X^N + 1` for `a` in `[0, 2N)`.
    #[inline]
    pub fn mul_by_x_ai(&self, a: usize) -> Self {
        let mut dst = Self::zero(self.coeff_count());
        self.mul_by_x_ai_into(a, &mut dst);
        dst
    }

    /// Returns `(X^a - 1) * self` modulo `X^N + 1` for `a` in `[0, 2N)`.
    #[inline]
    pub fn mul_by_x_ai_minus_one(&self, a: usize) -> Self {
        let mut dst = Self::zero(self.coeff_count());
        self.mul_by_x_ai_minus_one_into(a, &mut dst);
        dst
    }

    /// Computes `self += X^a * src` modulo `X^N + 1` for `a` in `[0, 2N)`.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ or `a >= 2N`.
    pub fn add_mul_by_x_ai_assign(&mut self, a: usize, src: &Self) {
        let n = self.coeff_count();
        assert_eq!(n, src.coeff_count(), "degree mismatch");
        assert!(a < 2 * n, "monomial exponent {a} out of range [0, {})", 2 * n);

        let (a, neg) = if a < n { (a, false) } else { (a - n, true) };
        let out = self.as_mut_slice();
        let src = src.as_slice();
        // tail wraps with a sign flip
        for (o, &s) in out[..a].iter_mut().zip(&src[n - a..]) {
            *o = if neg { o.wrapping_add(s) } else { o.wrapping_sub(s) };
        }
        for (o, &s) in out[a..].iter_mut().zip(&src[..n - a]) {
            *o = if neg { o.wrapping_sub(s) } else { o.wrapping_add(s) };
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha12Rng;

    use crate::{naive_mul, IntPolynomial, Torus32, TorusPolynomial};

    const N: usize = 16;

    fn monomial(a: usize) -> IntPolynomial {
        let mut m = IntPolynomial::zero(N);
        if a < N {
            m[a] = 1;
        } else {
            m[a - N] = -1;
        }
        m
    }

    #[test]
    fn test_mul_by_x_ai_matches_naive() {
        let mut rng = ChaCha12Rng::seed_from_u64(3);
        let p: TorusPolynomial = (0..N).map(|_| rng.gen::<Torus32>()).collect();

        for a in 0..2 * N {
            let expect = naive_mul(&monomial(a), &p);
            assert_eq!(p.mul_by_x_ai(a), expect, "a = {a}");

            let expect_minus_one = &expect - &p;
            assert_eq!(p.mul_by_x_ai_minus_one(a), expect_minus_one, "a = {a}");

            let mut acc = p.clone();
            acc.add_mul_by_x_ai_assign(a, &p);
            assert_eq!(acc, &p + &expect, "a = {a}");
        }
    }

    #[test]
    fn test_negacyclic_rule() {
        let p = IntPolynomial::new(vec![1, 2, 3, 4]);
        assert_eq!(p.mul_by_x_ai(1).as_slice(), &[-4, 1, 2, 3]);
        assert_eq!(p.mul_by_x_ai(4).as_slice(), &[-1, -2, -3, -4]);
        assert_eq!(p.mul_by_x_ai(6).as_slice(), &[3, 4, -1, -2]);
        assert_eq!(p.mul_by_x_ai(0), p);
        assert!(p.mul_by_x_ai_minus_one(0).is_zero());
    }

    #[test]
    #[should_panic]
    fn test_exponent_out_of_range() {
        let p = IntPolynomial::zero(4);
        let _ = p.mul_by_x_ai(8);
    }
}

use algebra::{FftProcessor, IntPolynomial, Torus32, TorusPolynomial};

use super::Tlwe;

impl Tlwe {
    /// Performs `self += rhs`.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn add_assign_component_wise(&mut self, rhs: &Self) {
        self.check_shape(rhs);
        self.polys
            .iter_mut()
            .zip(rhs.polys.iter())
            .for_each(|(d, s)| d.add_assign_element_wise(s));
        self.variance += rhs.variance;
    }

    /// Performs `self -= rhs`.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn sub_assign_component_wise(&mut self, rhs: &Self) {
        self.check_shape(rhs);
        self.polys
            .iter_mut()
            .zip(rhs.polys.iter())
            .for_each(|(d, s)| d.sub_assign_element_wise(s));
        self.variance += rhs.variance;
    }

    /// Performs `self += p * rhs` with an integer scalar `p`.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn add_mul_assign(&mut self, p: i32, rhs: &Self) {
        self.check_shape(rhs);
        self.polys
            .iter_mut()
            .zip(rhs.polys.iter())
            .for_each(|(d, s)| d.add_mul_scalar_assign(p, s));
        self.variance += (p as f64) * (p as f64) * rhs.variance;
    }

    /// Performs `self -= p * rhs` with an integer scalar `p`.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn sub_mul_assign(&mut self, p: i32, rhs: &Self) {
        self.check_shape(rhs);
        self.polys
            .iter_mut()
            .zip(rhs.polys.iter())
            .for_each(|(d, s)| d.sub_mul_scalar_assign(p, s));
        self.variance += (p as f64) * (p as f64) * rhs.variance;
    }

    /// Performs `self += p * rhs` with an integer polynomial `p`.
    ///
    /// The variance of `rhs` is scaled by the squared euclidean norm of `p`.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn add_mul_r_assign(&mut self, p: &IntPolynomial, rhs: &Self, fft: &FftProcessor) {
        self.check_shape(rhs);
        self.polys
            .iter_mut()
            .zip(rhs.polys.iter())
            .for_each(|(d, s)| fft.add_mul_assign(d, p, s));
        self.variance += p.norm_sq2() * rhs.variance;
    }

    /// Performs `self -= p * rhs` with an integer polynomial `p`.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn sub_mul_r_assign(&mut self, p: &IntPolynomial, rhs: &Self, fft: &FftProcessor) {
        self.check_shape(rhs);
        self.polys
            .iter_mut()
            .zip(rhs.polys.iter())
            .for_each(|(d, s)| fft.sub_mul_assign(d, p, s));
        self.variance += p.norm_sq2() * rhs.variance;
    }

    /// Adds the torus value `x` to the constant coefficient of the polynomial at `pos`.
    ///
    /// `pos` ranges over `[0, k]`, `k` being `b`.
    #[inline]
    pub fn add_t_assign(&mut self, pos: usize, x: Torus32) {
        self.polys[pos][0] += x;
    }

    /// Adds `p * x` to the polynomial at `pos`, `p` being an integer polynomial and `x` a torus value.
    ///
    /// # Panics
    ///
    /// Panics if the degree of `p` differs.
    pub fn add_rt_assign(&mut self, pos: usize, p: &IntPolynomial, x: Torus32) {
        let poly = &mut self.polys[pos];
        assert_eq!(poly.coeff_count(), p.coeff_count(), "degree mismatch");
        poly.iter_mut()
            .zip(p.iter())
            .for_each(|(c, &pi)| *c += x.mul_int(pi));
    }

    /// Performs `self = -self`.
    #[inline]
    pub fn neg_assign(&mut self) {
        self.polys.iter_mut().for_each(TorusPolynomial::neg_assign);
    }

    /// Writes `X^a * self` into `destination`, `a` in `[0, 2N)`.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ or if `a >= 2N`.
    pub fn mul_by_x_ai_into(&self, a: usize, destination: &mut Self) {
        self.check_shape(destination);
        self.polys
            .iter()
            .zip(destination.polys.iter_mut())
            .for_each(|(s, d)| s.mul_by_x_ai_into(a, d));
        destination.variance = self.variance;
    }

    /// Writes `(X^a - 1) * self` into `destination`, `a` in `[0, 2N)`.
    ///
    /// The noise variance doubles, except for `a = 0` which gives `0`.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ or if `a >= 2N`.
    pub fn mul_by_x_ai_minus_one_into(&self, a: usize, destination: &mut Self) {
        self.check_shape(destination);
        self.polys
            .iter()
            .zip(destination.polys.iter_mut())
            .for_each(|(s, d)| s.mul_by_x_ai_minus_one_into(a, d));
        destination.variance = if a == 0 { 0. } else { 2. * self.variance };
    }
}

#[cfg(test)]
mod tests {
    use algebra::{naive_mul, FftProcessor, IntPolynomial, Torus32, TorusPolynomial};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha12Rng;

    use crate::Tlwe;

    fn random_tlwe(k: usize, n: usize, rng: &mut ChaCha12Rng) -> Tlwe {
        let polys = (0..=k)
            .map(|_| (0..n).map(|_| rng.gen::<Torus32>()).collect())
            .collect();
        Tlwe::new(polys, 1e-10)
    }

    #[test]
    fn test_linear_ops() {
        let mut rng = ChaCha12Rng::seed_from_u64(6);
        let x = random_tlwe(2, 16, &mut rng);
        let y = random_tlwe(2, 16, &mut rng);

        let mut z = x.clone();
        z.add_assign_component_wise(&y);
        assert_eq!(z.variance(), 2e-10);
        z.sub_assign_component_wise(&y);
        assert_eq!(z.polys(), x.polys());

        z.add_mul_assign(-3, &y);
        assert_eq!(z.b(), &(x.b() - &(y.b() + &(y.b() + y.b()))));
        z.sub_mul_assign(-3, &y);
        assert_eq!(z.polys(), x.polys());

        z.neg_assign();
        assert_eq!(z.a(1), &-x.a(1));
    }

    #[test]
    fn test_add_mul_r() {
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        let n = 32;
        let fft = FftProcessor::new(n).unwrap();
        let x = random_tlwe(1, n, &mut rng);
        let p: IntPolynomial = (0..n).map(|_| rng.gen_range(-2..=2)).collect();

        let mut z = Tlwe::zero(1, n);
        z.add_mul_r_assign(&p, &x, &fft);
        assert_eq!(z.a(0), &naive_mul(&p, x.a(0)));
        assert_eq!(z.b(), &naive_mul(&p, x.b()));
        assert_eq!(z.variance(), p.norm_sq2() * x.variance());

        z.sub_mul_r_assign(&p, &x, &fft);
        assert!(z.polys().iter().all(TorusPolynomial::is_zero));
    }

    #[test]
    fn test_single_component_updates() {
        let n = 8;
        let mut z = Tlwe::zero(1, n);
        z.add_t_assign(0, Torus32::new(5));
        z.add_t_assign(1, Torus32::new(-5));
        assert_eq!(z.a(0)[0], Torus32::new(5));
        assert_eq!(z.b()[0], Torus32::new(-5));

        let p = IntPolynomial::new(vec![1, -1, 2, 0, 0, 0, 0, 3]);
        z.add_rt_assign(1, &p, Torus32::new(10));
        assert_eq!(z.b()[0], Torus32::new(5));
        assert_eq!(z.b()[1], Torus32::new(-10));
        assert_eq!(z.b()[2], Torus32::new(20));
        assert_eq!(z.b()[7], Torus32::new(30));
    }

    #[test]
    fn test_rotations() {
        let mut rng = ChaCha12Rng::seed_from_u64(8);
        let n = 16;
        let x = random_tlwe(1, n, &mut rng);

        let mut rotated = Tlwe::zero(1, n);
        let mut diff = Tlwe::zero(1, n);
        for a in [0usize, 1, 15, 16, 17, 31] {
            x.mul_by_x_ai_into(a, &mut rotated);
            x.mul_by_x_ai_minus_one_into(a, &mut diff);
            let mut expect = rotated.clone();
            expect.sub_assign_component_wise(&x);
            assert_eq!(diff.polys(), expect.polys());
        }
    }
}

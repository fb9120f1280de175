//! Negacyclic fast fourier transform over `R[X]/(X^N + 1)`.
//!
//! Multiplying an [`IntPolynomial`](crate::IntPolynomial) by a
//! [`TorusPolynomial`](crate::TorusPolynomial) goes through the frequency
//! domain: both operands are transformed into [`FourierPolynomial`]s, multiplied
//! pointwise, and the product is transformed back with rounding modulo `2^32`.
//!
//! The transform is computed with `f64`. The result of a product is exact as
//! long as `N * |int| * 2^31` stays well below `2^52`, which holds for the
//! gadget digits and binary keys it is used with.

mod fourier_polynomial;
mod processor;
mod table;

pub use fourier_polynomial::FourierPolynomial;
pub use processor::FftProcessor;
pub use table::FftTable;

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha12Rng;

    use crate::{naive_mul, FftProcessor, FourierPolynomial, IntPolynomial, Torus32, TorusPolynomial};

    fn random_torus(n: usize, rng: &mut ChaCha12Rng) -> TorusPolynomial {
        (0..n).map(|_| rng.gen::<Torus32>()).collect()
    }

    fn random_int(n: usize, bound: i32, rng: &mut ChaCha12Rng) -> IntPolynomial {
        (0..n).map(|_| rng.gen_range(-bound..=bound)).collect()
    }

    #[test]
    fn test_round_trip_torus() {
        let mut rng = ChaCha12Rng::seed_from_u64(11);
        for n in [2usize, 8, 256, 1024, 2048] {
            let fft = FftProcessor::new(n).unwrap();
            let p = random_torus(n, &mut rng);
            let fp = fft.transform_torus(&p);
            let mut q = TorusPolynomial::zero(n);
            fft.inverse_torus(&fp, &mut q);
            assert_eq!(p, q, "n = {n}");
        }
    }

    #[test]
    fn test_round_trip_int() {
        let mut rng = ChaCha12Rng::seed_from_u64(12);
        for n in [4usize, 512, 2048] {
            let fft = FftProcessor::new(n).unwrap();
            let p = random_int(n, 1 << 20, &mut rng);
            let fp = fft.transform_int(&p);
            let mut q = IntPolynomial::zero(n);
            fft.inverse_int(&fp, &mut q);
            assert_eq!(p, q, "n = {n}");
        }
    }

    #[test]
    fn test_mul_matches_naive() {
        let mut rng = ChaCha12Rng::seed_from_u64(13);
        for (n, bound) in [(8usize, 512), (1024, 512), (1024, 1), (2048, 64)] {
            let fft = FftProcessor::new(n).unwrap();
            let a = random_int(n, bound, &mut rng);
            let b = random_torus(n, &mut rng);

            let expect = naive_mul(&a, &b);
            let result = fft.mul(&a, &b);

            // the error of the f64 transform is a handful of units of 2^-32
            for (x, y) in expect.iter().zip(result.iter()) {
                assert!((*x - *y).inner().unsigned_abs() <= 64, "n = {n}");
            }
        }
    }

    #[test]
    fn test_add_sub_mul_assign() {
        let mut rng = ChaCha12Rng::seed_from_u64(14);
        let n = 64;
        let fft = FftProcessor::new(n).unwrap();
        let a = random_int(n, 1, &mut rng);
        let b = random_torus(n, &mut rng);
        let c = random_torus(n, &mut rng);

        let mut acc = c.clone();
        fft.add_mul_assign(&mut acc, &a, &b);
        assert_eq!(acc, &c + &naive_mul(&a, &b));

        fft.sub_mul_assign(&mut acc, &a, &b);
        assert_eq!(acc, c);
    }

    #[test]
    fn test_monomial() {
        let n = 32;
        let fft = FftProcessor::new(n).unwrap();
        for a in [0usize, 1, 5, 31, 32, 47, 63] {
            let mut mono = IntPolynomial::zero(n);
            if a < n {
                mono[a] = 1;
            } else {
                mono[a - n] = -1;
            }
            let expect = fft.transform_int(&mono);
            let mut got = FourierPolynomial::zero(n);
            fft.forward_monomial(a, &mut got);

            let (er, ei) = expect.re_im();
            let (gr, gi) = got.re_im();
            for j in 0..n / 2 {
                assert!((er[j] - gr[j]).abs() < 1e-9, "a = {a}");
                assert!((ei[j] - gi[j]).abs() < 1e-9, "a = {a}");
            }
        }
    }

    #[test]
    fn test_shallow_copy_shares_table() {
        let fft = FftProcessor::new(16).unwrap();
        let copy = fft.shallow_copy();
        assert!(std::ptr::eq(fft.table(), copy.table()));
        assert_eq!(copy.dimension(), 16);
        assert!(FftProcessor::new(12).is_err());
    }
}

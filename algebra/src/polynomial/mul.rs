use super::{IntPolynomial, TorusPolynomial};

/// Multiplies `poly1` and `poly2` modulo `X^N + 1` with the schoolbook algorithm.
///
/// This runs in `O(N²)` and serves as a reference for the fft based product.
///
/// # Panics
///
/// Panics if the coefficient counts differ.
pub fn naive_mul(poly1: &IntPolynomial, poly2: &TorusPolynomial) -> TorusPolynomial {
    let n = poly1.coeff_count();
    assert_eq!(n, poly2.coeff_count(), "degree mismatch");

    let mut result = TorusPolynomial::zero(n);
    let a = poly1.as_slice();
    let b = poly2.as_slice();

    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            let k = i + j;
            if k < n {
                result[k] += bj * ai;
            } else {
                result[k - n] -= bj * ai;
            }
        }
    }

    result
}

impl TorusPolynomial {
    /// Computes `self += poly1 * poly2` modulo `X^N + 1` with the schoolbook algorithm.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient counts differ.
    #[inline]
    pub fn add_naive_mul_assign(&mut self, poly1: &IntPolynomial, poly2: &TorusPolynomial) {
        let product = naive_mul(poly1, poly2);
        self.add_assign_element_wise(&product);
    }
}

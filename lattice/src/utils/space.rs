use std::ops::{Deref, DerefMut};

use algebra::{FourierPolynomial, IntPolynomial};

use crate::{FourierTlwe, Tlwe};

/// Pre allocated space for the gadget decomposition of one polynomial.
#[derive(Debug, Clone)]
pub struct DecompositionSpace {
    space: Vec<IntPolynomial>,
}

impl Deref for DecompositionSpace {
    type Target = [IntPolynomial];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.space
    }
}

impl DerefMut for DecompositionSpace {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.space
    }
}

impl DecompositionSpace {
    /// Creates a new [`DecompositionSpace`] for `length` digits of `coeff_count` coefficients.
    #[inline]
    pub fn new(length: usize, coeff_count: usize) -> Self {
        Self {
            space: vec![IntPolynomial::zero(coeff_count); length],
        }
    }
}

/// Pre allocated space for a polynomial in the frequency domain.
#[derive(Debug, Clone)]
pub struct FourierPolynomialSpace {
    space: FourierPolynomial,
}

impl Deref for FourierPolynomialSpace {
    type Target = FourierPolynomial;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.space
    }
}

impl DerefMut for FourierPolynomialSpace {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.space
    }
}

impl FourierPolynomialSpace {
    /// Creates a new [`FourierPolynomialSpace`].
    #[inline]
    pub fn new(coeff_count: usize) -> Self {
        Self {
            space: FourierPolynomial::zero(coeff_count),
        }
    }
}

/// Pre allocated space for a [`FourierTlwe`].
#[derive(Debug, Clone)]
pub struct FourierTlweSpace {
    space: FourierTlwe,
}

impl Deref for FourierTlweSpace {
    type Target = FourierTlwe;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.space
    }
}

impl DerefMut for FourierTlweSpace {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.space
    }
}

impl FourierTlweSpace {
    /// Creates a new [`FourierTlweSpace`].
    #[inline]
    pub fn new(module_rank: usize, coeff_count: usize) -> Self {
        Self {
            space: FourierTlwe::zero(module_rank, coeff_count),
        }
    }
}

/// Pre allocated space for a [`Tlwe`].
#[derive(Debug, Clone)]
pub struct TlweSpace {
    space: Tlwe,
}

impl Deref for TlweSpace {
    type Target = Tlwe;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.space
    }
}

impl DerefMut for TlweSpace {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.space
    }
}

impl TlweSpace {
    /// Creates a new [`TlweSpace`].
    #[inline]
    pub fn new(module_rank: usize, coeff_count: usize) -> Self {
        Self {
            space: Tlwe::zero(module_rank, coeff_count),
        }
    }
}

/// All the scratch buffers of one external product.
#[derive(Debug, Clone)]
pub struct ExternalProductSpace {
    /// The digits of the polynomial being decomposed.
    pub decompose_space: DecompositionSpace,
    /// The transform of the current digit.
    pub fourier_space: FourierPolynomialSpace,
    /// The frequency domain accumulator.
    pub accumulator: FourierTlweSpace,
}

impl ExternalProductSpace {
    /// Creates a new [`ExternalProductSpace`] for decompositions of `length` digits.
    #[inline]
    pub fn new(module_rank: usize, length: usize, coeff_count: usize) -> Self {
        Self {
            decompose_space: DecompositionSpace::new(length, coeff_count),
            fourier_space: FourierPolynomialSpace::new(coeff_count),
            accumulator: FourierTlweSpace::new(module_rank, coeff_count),
        }
    }
}

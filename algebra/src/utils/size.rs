use core::mem;

use crate::{FourierPolynomial, Polynomial};

/// A trait for the size of a value.
pub trait Size {
    /// Returns the size of the pointed-to value in bytes.
    fn size(&self) -> usize;
}

impl<T: Size> Size for [T] {
    #[inline]
    fn size(&self) -> usize {
        self.iter().map(Size::size).sum()
    }
}

impl<T: Size> Size for Vec<T> {
    #[inline]
    fn size(&self) -> usize {
        self.as_slice().size()
    }
}

impl<T> Size for Polynomial<T> {
    #[inline]
    fn size(&self) -> usize {
        self.coeff_count() * mem::size_of::<T>()
    }
}

impl Size for FourierPolynomial {
    #[inline]
    fn size(&self) -> usize {
        self.coeff_count() * mem::size_of::<f64>()
    }
}

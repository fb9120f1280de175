//! Defines some algorithms for random values generation.

mod numeric;

pub use numeric::*;

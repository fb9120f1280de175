#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Define arithmetic operations over the discretized torus.
//!
//! This crate provides the 32-bit torus [`Torus32`], integer and torus
//! polynomials modulo `X^N + 1`, and a negacyclic FFT used to multiply them.

mod error;
mod torus;

pub mod fft;
pub mod polynomial;
pub mod random;
pub mod utils;

pub use error::AlgebraError;
pub use fft::{FftProcessor, FftTable, FourierPolynomial};
pub use polynomial::{naive_mul, Coefficient, IntPolynomial, Polynomial, TorusPolynomial};
pub use torus::{approx_phase, mod_switch_from_torus, mod_switch_to_torus, Torus32};

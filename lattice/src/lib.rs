#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Defines the lattice cryptographic structures over the torus.
//!
//! [`Lwe`] samples encrypt a single torus value, [`Tlwe`] samples encrypt a
//! torus polynomial modulo `X^N + 1`, and [`Tgsw`] samples are gadget encoded
//! [`Tlwe`] matrices whose frequency domain form [`FourierTgsw`] drives the
//! external product of the blind rotation.

mod gadget;
mod lwe;
mod tgsw;
mod tlwe;

pub mod utils;

pub use gadget::GadgetDecomposition;
pub use lwe::Lwe;
pub use tgsw::{FourierTgsw, Tgsw};
pub use tlwe::{extract_lwe_key, FourierTlwe, Tlwe};

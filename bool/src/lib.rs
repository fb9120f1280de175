#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Boolean gates over the torus, evaluated with gate bootstrapping.
//!
//! A bit is encrypted as a [`lattice::Lwe`] sample of `±1/8`. Every binary
//! gate adds its inputs with a bias and bootstraps the result, so that the
//! output carries a fresh noise whatever the depth of the circuit.
//!
//! The same bootstrapping evaluates any function of a small message space
//! `Z_m` through a [`LookUpTable`].

mod bfhe;
mod parameter;

mod decrypt;
mod encrypt;
mod key_gen;

pub use bfhe::{BinaryGate, EvaluationKey, Evaluator};
pub use decrypt::Decryptor;
pub use encrypt::Encryptor;
pub use key_gen::KeyGen;
pub use parameter::{
    CONST_DEFAULT_128_BITS_PARAMETERS, CONST_DEFAULT_80_BITS_PARAMETERS,
    DEFAULT_128_BITS_PARAMETERS, DEFAULT_80_BITS_PARAMETERS,
};

pub use fhe_core::{
    ConstParameters, FHECoreError, LookUpTable, LutEncoder, Parameters, SecretKeyPack,
};
pub use lattice::Lwe;

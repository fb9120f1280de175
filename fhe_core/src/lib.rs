#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Implementations of FHE core operations.
//!
//! This crate holds the key material and the building blocks of the gate
//! bootstrapping: parameters, secret keys, the key switching key, the blind
//! rotation key, the lookup tables of the programmable bootstrapping and the
//! modulus switching of [`lattice::Lwe`] samples.

mod blind_rotation;
mod bool_plaintext;
mod error;
mod key_switch;
mod lut;
mod modulus_switch;
mod parameter;
mod secret_key;
mod utils;

pub use blind_rotation::BlindRotationKey;
pub use bool_plaintext::{decode, encode, noise_distance, FALSE_MESSAGE, TRUE_MESSAGE};
pub use error::FHECoreError;
pub use key_switch::KeySwitchingKey;
pub use lut::{LookUpTable, LutEncoder};
pub use modulus_switch::{lwe_modulus_switch, lwe_modulus_switch_inplace, ModulusSwitchedLwe};
pub use parameter::{
    ConstParameters, KeySwitchingParameters, LweParameters, Parameters, TgswParameters,
    TlweParameters,
};
pub use secret_key::{LweSecretKey, SecretKeyPack, TlweSecretKey};
pub use utils::*;

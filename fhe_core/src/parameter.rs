use lattice::GadgetDecomposition;
use serde::{Deserialize, Serialize};

use crate::FHECoreError;

/// Parameters for LWE.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LweParameters {
    /// LWE vector dimension, refers to **`n`** in the paper.
    pub dimension: usize,
    /// The smallest noise standard deviation that keeps the samples secure.
    pub alpha_min: f64,
    /// The largest noise standard deviation that keeps the samples decryptable.
    pub alpha_max: f64,
}

/// Parameters for TLWE.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TlweParameters {
    /// Ring polynomial dimension, refers to **`N`** in the paper.
    pub ring_dimension: usize,
    /// Module rank, refers to **`k`** in the paper.
    pub module_rank: usize,
    /// The smallest noise standard deviation that keeps the samples secure.
    pub alpha_min: f64,
    /// The largest noise standard deviation that keeps the samples decryptable.
    pub alpha_max: f64,
}

impl TlweParameters {
    /// Returns the parameters of the [`lattice::Lwe`] samples extracted from
    /// these [`TlweParameters`], of dimension `k * N`.
    #[inline]
    pub fn extracted_lwe_params(&self) -> LweParameters {
        LweParameters {
            dimension: self.module_rank * self.ring_dimension,
            alpha_min: self.alpha_min,
            alpha_max: self.alpha_max,
        }
    }
}

/// Parameters for TGSW, the samples of the blind rotation key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TgswParameters {
    /// Decomposition length, refers to **`l`** in the paper.
    pub length: usize,
    /// Decomposition basis bits, refers to **`Bgbit`** in the paper.
    pub basis_bits: u32,
    /// Parameters of the rows.
    pub tlwe_params: TlweParameters,
}

impl TgswParameters {
    /// Builds the gadget decomposition described by these [`TgswParameters`].
    #[inline]
    pub fn gadget(&self) -> GadgetDecomposition {
        GadgetDecomposition::new(self.length, self.basis_bits)
    }

    /// Returns the decomposition basis, refers to **`Bg`** in the paper.
    #[inline]
    pub fn basis(&self) -> u32 {
        1 << self.basis_bits
    }
}

/// Parameters for key switching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeySwitchingParameters {
    /// Decomposition basis bits.
    pub basis_bits: u32,
    /// Decomposition length, refers to **`t`** in the paper.
    pub length: usize,
    /// The noise standard deviation of the key switching key.
    pub std_dev: f64,
}

impl KeySwitchingParameters {
    /// Returns the decomposition basis.
    #[inline]
    pub fn basis(&self) -> usize {
        1 << self.basis_bits
    }
}

/// The parameters of the fully homomorphic encryption scheme.
///
/// This type is used for setting some default Parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstParameters {
    /// LWE vector dimension, refers to **`n`** in the paper.
    pub lwe_dimension: usize,
    /// The lwe noise error's standard deviation, used to encrypt the input bits.
    pub lwe_noise_std_dev: f64,
    /// The largest noise standard deviation a sample may carry before
    /// decryption fails.
    pub max_noise_std_dev: f64,

    /// Ring polynomial dimension, refers to **`N`** in the paper.
    pub ring_dimension: usize,
    /// Module rank, refers to **`k`** in the paper.
    pub module_rank: usize,
    /// The ring noise error's standard deviation for the blind rotation key.
    pub ring_noise_std_dev: f64,

    /// Decompose basis bits used for blind rotation accumulator.
    pub blind_rotation_basis_bits: u32,
    /// Decompose length used for blind rotation accumulator.
    pub blind_rotation_length: usize,

    /// Decompose basis bits used for key switching.
    pub key_switching_basis_bits: u32,
    /// Decompose length used for key switching.
    pub key_switching_length: usize,
    /// The lwe noise error's standard deviation for key switching.
    pub key_switching_std_dev: f64,
}

/// Parameters for FHE
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    lwe_params: LweParameters,
    tlwe_params: TlweParameters,
    tgsw_params: TgswParameters,
    key_switching_params: KeySwitchingParameters,
}

impl Parameters {
    /// Create a new Parameter instance.
    pub fn new(params: ConstParameters) -> Result<Self, FHECoreError> {
        if params.lwe_dimension == 0 {
            return Err(FHECoreError::LweDimensionUnValid(params.lwe_dimension));
        }

        // N = 2^i
        let ring_dimension = params.ring_dimension;
        if ring_dimension < 2 || !ring_dimension.is_power_of_two() {
            return Err(FHECoreError::RingDimensionUnValid(ring_dimension));
        }

        if !(1..=2).contains(&params.module_rank) {
            return Err(FHECoreError::ModuleRankUnValid(params.module_rank));
        }

        let length = params.blind_rotation_length;
        let basis_bits = params.blind_rotation_basis_bits;
        if length == 0 || basis_bits == 0 || length as u64 * basis_bits as u64 > 32 {
            return Err(FHECoreError::BlindRotationDecompositionUnValid { length, basis_bits });
        }

        let length = params.key_switching_length;
        let basis_bits = params.key_switching_basis_bits;
        if length == 0 || basis_bits == 0 || length as u64 * basis_bits as u64 > 32 {
            return Err(FHECoreError::KeySwitchingDecompositionUnValid { length, basis_bits });
        }

        for std_dev in [
            params.lwe_noise_std_dev,
            params.max_noise_std_dev,
            params.ring_noise_std_dev,
            params.key_switching_std_dev,
        ] {
            if !std_dev.is_finite() || std_dev < 0. {
                return Err(FHECoreError::StdDevUnValid(std_dev));
            }
        }

        let lwe_params = LweParameters {
            dimension: params.lwe_dimension,
            alpha_min: params.lwe_noise_std_dev,
            alpha_max: params.max_noise_std_dev,
        };

        let tlwe_params = TlweParameters {
            ring_dimension,
            module_rank: params.module_rank,
            alpha_min: params.ring_noise_std_dev,
            alpha_max: params.max_noise_std_dev,
        };

        let tgsw_params = TgswParameters {
            length: params.blind_rotation_length,
            basis_bits: params.blind_rotation_basis_bits,
            tlwe_params,
        };

        let key_switching_params = KeySwitchingParameters {
            basis_bits: params.key_switching_basis_bits,
            length: params.key_switching_length,
            std_dev: params.key_switching_std_dev,
        };

        Ok(Self {
            lwe_params,
            tlwe_params,
            tgsw_params,
            key_switching_params,
        })
    }

    /// Returns the lwe dimension of this [`Parameters`], refers to **`n`** in the paper.
    #[inline]
    pub fn lwe_dimension(&self) -> usize {
        self.lwe_params.dimension
    }

    /// Returns the lwe noise error's standard deviation of this [`Parameters`].
    #[inline]
    pub fn lwe_noise_std_dev(&self) -> f64 {
        self.lwe_params.alpha_min
    }

    /// Returns the largest noise standard deviation of this [`Parameters`].
    #[inline]
    pub fn max_noise_std_dev(&self) -> f64 {
        self.lwe_params.alpha_max
    }

    /// Returns the ring dimension of this [`Parameters`], refers to **`N`** in the paper.
    #[inline]
    pub fn ring_dimension(&self) -> usize {
        self.tlwe_params.ring_dimension
    }

    /// Returns `2N`, the modulus the lwe samples are switched to before blind rotation.
    #[inline]
    pub fn twice_ring_dimension(&self) -> usize {
        self.tlwe_params.ring_dimension << 1
    }

    /// Returns the module rank of this [`Parameters`], refers to **`k`** in the paper.
    #[inline]
    pub fn module_rank(&self) -> usize {
        self.tlwe_params.module_rank
    }

    /// Returns the dimension `k * N` of the samples extracted after blind rotation.
    #[inline]
    pub fn extracted_lwe_dimension(&self) -> usize {
        self.tlwe_params.module_rank * self.tlwe_params.ring_dimension
    }

    /// Returns the ring noise error's standard deviation of this [`Parameters`].
    #[inline]
    pub fn ring_noise_std_dev(&self) -> f64 {
        self.tlwe_params.alpha_min
    }

    /// Returns the blind rotation basis bits of this [`Parameters`], refers to **`Bgbit`** in the paper.
    #[inline]
    pub fn blind_rotation_basis_bits(&self) -> u32 {
        self.tgsw_params.basis_bits
    }

    /// Returns the blind rotation decomposition length of this [`Parameters`], refers to **`l`** in the paper.
    #[inline]
    pub fn blind_rotation_length(&self) -> usize {
        self.tgsw_params.length
    }

    /// Returns the key switching basis bits of this [`Parameters`].
    #[inline]
    pub fn key_switching_basis_bits(&self) -> u32 {
        self.key_switching_params.basis_bits
    }

    /// Returns the key switching decomposition length of this [`Parameters`], refers to **`t`** in the paper.
    #[inline]
    pub fn key_switching_length(&self) -> usize {
        self.key_switching_params.length
    }

    /// Returns the key switching noise standard deviation of this [`Parameters`].
    #[inline]
    pub fn key_switching_std_dev(&self) -> f64 {
        self.key_switching_params.std_dev
    }

    /// Builds the gadget decomposition of the blind rotation key.
    #[inline]
    pub fn gadget(&self) -> GadgetDecomposition {
        self.tgsw_params.gadget()
    }

    /// Returns the lwe parameters of this [`Parameters`].
    #[inline]
    pub fn lwe_params(&self) -> &LweParameters {
        &self.lwe_params
    }

    /// Returns the tlwe parameters of this [`Parameters`].
    #[inline]
    pub fn tlwe_params(&self) -> &TlweParameters {
        &self.tlwe_params
    }

    /// Returns the tgsw parameters of this [`Parameters`].
    #[inline]
    pub fn tgsw_params(&self) -> &TgswParameters {
        &self.tgsw_params
    }

    /// Returns the key switching parameters of this [`Parameters`].
    #[inline]
    pub fn key_switching_params(&self) -> &KeySwitchingParameters {
        &self.key_switching_params
    }

    /// Returns the [`ConstParameters`] this [`Parameters`] was built from.
    pub fn to_const_params(&self) -> ConstParameters {
        ConstParameters {
            lwe_dimension: self.lwe_params.dimension,
            lwe_noise_std_dev: self.lwe_params.alpha_min,
            max_noise_std_dev: self.lwe_params.alpha_max,
            ring_dimension: self.tlwe_params.ring_dimension,
            module_rank: self.tlwe_params.module_rank,
            ring_noise_std_dev: self.tlwe_params.alpha_min,
            blind_rotation_basis_bits: self.tgsw_params.basis_bits,
            blind_rotation_length: self.tgsw_params.length,
            key_switching_basis_bits: self.key_switching_params.basis_bits,
            key_switching_length: self.key_switching_params.length,
            key_switching_std_dev: self.key_switching_params.std_dev,
        }
    }
}

impl TryFrom<ConstParameters> for Parameters {
    type Error = FHECoreError;

    #[inline]
    fn try_from(params: ConstParameters) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

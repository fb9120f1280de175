use algebra::AlgebraError;

/// Errors that may occur.
#[derive(thiserror::Error, Debug)]
pub enum FHECoreError {
    /// Error that occurs when the given lwe dimension is not valid.
    #[error("LWE dimension {0} is not valid!")]
    LweDimensionUnValid(
        /// The given dimension.
        usize,
    ),
    /// Error that occurs when the given ring dimension is not valid.
    #[error("Ring dimension {0} is not valid!")]
    RingDimensionUnValid(
        /// The given dimension.
        usize,
    ),
    /// Error that occurs when the given module rank is not valid.
    #[error("Module rank {0} is not valid!")]
    ModuleRankUnValid(
        /// The given module rank.
        usize,
    ),
    /// Error that occurs when the gadget decomposition of the
    /// blind rotation key is not valid.
    #[error("Blind rotation decomposition with length {length} and basis bits {basis_bits} is not valid!")]
    BlindRotationDecompositionUnValid {
        /// Decomposition length `l`
        length: usize,
        /// Decomposition basis bits `Bgbit`
        basis_bits: u32,
    },
    /// Error that occurs when the decomposition of the
    /// key switching key is not valid.
    #[error("Key switching decomposition with length {length} and basis bits {basis_bits} is not valid!")]
    KeySwitchingDecompositionUnValid {
        /// Decomposition length `t`
        length: usize,
        /// Decomposition basis bits
        basis_bits: u32,
    },
    /// Error that occurs when a noise standard deviation is not valid.
    #[error("Standard deviation {0} is not valid!")]
    StdDevUnValid(
        /// The given standard deviation.
        f64,
    ),
    /// Error that occurs when the message modulus of a lookup table is not valid.
    #[error("Message modulus {0} is not valid!")]
    MessageModulusUnValid(
        /// The given message modulus.
        usize,
    ),
    /// Error raised by the algebra layer.
    #[error(transparent)]
    AlgebraError(#[from] AlgebraError),
}

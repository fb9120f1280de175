use fhe_core::{ConstParameters, Parameters};
use once_cell::sync::Lazy;

/// Default 80-bits security Parameters
pub const CONST_DEFAULT_80_BITS_PARAMETERS: ConstParameters = ConstParameters {
    lwe_dimension: 500,
    lwe_noise_std_dev: 2.44e-5,
    max_noise_std_dev: 0.012467,
    ring_dimension: 1024,
    module_rank: 1,
    ring_noise_std_dev: 7.18e-9,
    blind_rotation_basis_bits: 10,
    blind_rotation_length: 2,
    key_switching_basis_bits: 2,
    key_switching_length: 8,
    key_switching_std_dev: 2.44e-5,
};

/// Default 128-bits security Parameters
pub const CONST_DEFAULT_128_BITS_PARAMETERS: ConstParameters = ConstParameters {
    lwe_dimension: 630,
    // 2^-15
    lwe_noise_std_dev: 3.0517578125e-5,
    max_noise_std_dev: 0.012467,
    ring_dimension: 1024,
    module_rank: 1,
    // 2^-25
    ring_noise_std_dev: 2.98023223876953125e-8,
    blind_rotation_basis_bits: 7,
    blind_rotation_length: 3,
    key_switching_basis_bits: 2,
    key_switching_length: 8,
    // 2^-15
    key_switching_std_dev: 3.0517578125e-5,
};

/// Default 80-bits security Parameters
pub static DEFAULT_80_BITS_PARAMETERS: Lazy<Parameters> =
    Lazy::new(|| Parameters::new(CONST_DEFAULT_80_BITS_PARAMETERS).unwrap());

/// Default 128-bits security Parameters
pub static DEFAULT_128_BITS_PARAMETERS: Lazy<Parameters> =
    Lazy::new(|| Parameters::new(CONST_DEFAULT_128_BITS_PARAMETERS).unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = *DEFAULT_128_BITS_PARAMETERS;
        assert_eq!(params.lwe_dimension(), 630);
        assert_eq!(params.lwe_noise_std_dev(), 2f64.powi(-15));
        assert_eq!(params.ring_noise_std_dev(), 2f64.powi(-25));
        assert_eq!(params.extracted_lwe_dimension(), 1024);

        let params = *DEFAULT_80_BITS_PARAMETERS;
        assert_eq!(params.lwe_dimension(), 500);
        assert_eq!(params.gadget().base(), 1024);
    }
}

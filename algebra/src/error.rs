//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug)]
pub enum AlgebraError {
    /// Error that occurs when fails to generate the distribution.
    #[error("Fail to generate the desired distribution.")]
    DistributionErr,
    /// Error that occurs when the polynomial dimension can not be handled by the fft.
    #[error("Dimension {0} is not supported by the fft, it should be a power of two no less than 2!")]
    FftDimensionErr(
        /// The polynomial dimension.
        usize,
    ),
}

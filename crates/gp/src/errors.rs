use thiserror::Error;

/// A result type for kernel and likelihood computations
pub type Result<T> = std::result::Result<T, GpError>;

/// An error when using a [`Kernel`](crate::Kernel) or a [`Likelihood`](crate::Likelihood)
#[derive(Error, Debug, PartialEq)]
pub enum GpError {
    /// When a parameter vector does not match the number of parameters of the model
    #[error("Parameter count error: expected {expected} values, got {actual}")]
    ParameterCountError {
        /// Number of parameters of the model
        expected: usize,
        /// Length of the given parameter vector
        actual: usize,
    },
    /// When arrays have incompatible lengths or shapes
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),
    /// When cached pairwise statistics cannot be used by a kernel
    #[error("Incompatible pairwise statistics: expected {expected}, got {actual}")]
    IncompatibleStats {
        /// Statistics required by the kernel
        expected: String,
        /// Statistics found in the cache
        actual: String,
    },
    /// When error due to a bad value
    #[error("InvalidValue error: {0}")]
    InvalidValueError(String),
}

impl GpError {
    /// Check that a parameter vector of length `actual` fits a model with `expected` parameters
    pub(crate) fn check_param_count(expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(GpError::ParameterCountError { expected, actual })
        }
    }

    /// Check that two arrays related to the same observations have the same length
    pub(crate) fn check_same_len(what: &str, a: usize, b: usize) -> Result<()> {
        if a == b {
            Ok(())
        } else {
            Err(GpError::DimensionMismatch(format!(
                "{what} lengths differ ({a} != {b})"
            )))
        }
    }
}

//! Error types for hard-example sampling.

use thiserror::Error;

/// Result type alias for sampling operations.
pub type Result<T> = core::result::Result<T, SamplingError>;

/// Sampling error types.
#[derive(Debug, Error)]
pub enum SamplingError {
    /// The buffer holds no examples.
    #[error("replay buffer is empty")]
    EmptyBuffer,

    /// Index past the end of the buffer. Under correct scheduler use this
    /// never surfaces; it indicates a logic defect in the caller.
    #[error("index {index} out of range for buffer of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Rejected configuration value.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl SamplingError {
    /// Create an invalid configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        SamplingError::InvalidConfig {
            message: message.into(),
        }
    }
}

impl From<SamplingError> for stolas_core::Error {
    fn from(err: SamplingError) -> Self {
        stolas_core::Error::Other(err.to_string())
    }
}

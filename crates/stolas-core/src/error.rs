//! Error types for model operations.

use thiserror::Error;

/// Result type alias for model operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Model error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Feature vector length does not match the model.
    #[error("dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Hyperparameter outside its valid range.
    #[error("invalid parameter {name}: {value} (must be {constraint})")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        constraint: &'static str,
    },

    /// Class label outside the model's label set.
    #[error("unknown label {label}: model has {n_classes} classes")]
    UnknownLabel { label: usize, n_classes: usize },

    /// Error raised by a wrapping or collaborating component.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, value: f32, constraint: &'static str) -> Self {
        Error::InvalidParameter {
            name,
            value,
            constraint,
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = Error::DimensionMismatch {
            expected: 4,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("expected 4"));
        assert!(msg.contains("got 3"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = Error::invalid_parameter("learning_rate", -0.1, "> 0");
        let msg = err.to_string();
        assert!(msg.contains("learning_rate"));
        assert!(msg.contains("-0.1"));
        assert!(msg.contains("> 0"));
    }

    #[test]
    fn test_unknown_label_display() {
        let err = Error::UnknownLabel {
            label: 7,
            n_classes: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("unknown label 7"));
        assert!(msg.contains("3 classes"));
    }

    #[test]
    fn test_from_string() {
        let err: Error = "buffer fault".to_string().into();
        assert!(matches!(err, Error::Other(_)));
        assert_eq!(err.to_string(), "buffer fault");
    }
}

//! Error types for parity plot construction.

use thiserror::Error;

/// Errors that can occur while building parity plot geometry.
#[derive(Debug, Error, PartialEq)]
pub enum ParityError {
    /// Predicted and measured series differ in length.
    #[error("predicted and measured lengths differ: {predicted} vs {measured}")]
    LengthMismatch { predicted: usize, measured: usize },

    /// No position has both a predicted and a measured value.
    #[error("no complete predicted/measured pairs (of {total} rows)")]
    NoCompletePairs { total: usize },

    /// No fold factors were requested.
    #[error("at least one fold factor is required")]
    NoFolds,

    /// Fold factor is zero, negative, or not finite.
    #[error("invalid fold factor {fold}: must be finite and greater than zero")]
    InvalidFold { fold: f64 },

    /// A complete pair contains an infinite value.
    #[error("non-finite value at row {index}: predicted {predicted}, measured {measured}")]
    NonFiniteValue {
        index: usize,
        predicted: f64,
        measured: f64,
    },
}

/// Result type for parity operations.
pub type Result<T> = std::result::Result<T, ParityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParityError::LengthMismatch {
            predicted: 3,
            measured: 4,
        };
        assert_eq!(
            err.to_string(),
            "predicted and measured lengths differ: 3 vs 4"
        );
    }

    #[test]
    fn test_invalid_fold_display() {
        let err = ParityError::InvalidFold { fold: -2.0 };
        assert_eq!(
            err.to_string(),
            "invalid fold factor -2: must be finite and greater than zero"
        );
    }
}

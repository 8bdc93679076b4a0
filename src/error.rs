//! Error types for the seasonal-fourier library.

use thiserror::Error;

/// Result type alias for Fourier feature operations.
pub type Result<T> = std::result::Result<T, FourierError>;

/// Errors that can occur while fitting or generating Fourier features.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FourierError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Index out of bounds.
    #[error("index out of bounds: {index} (size: {size})")]
    IndexOutOfBounds { index: usize, size: usize },
}

//! Error types for the GAF encoder

use thiserror::Error;

/// Errors raised while configuring or invoking a [`GafEncoder`](crate::GafEncoder)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GafError {
    /// Unknown field method or malformed configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Input does not have the (batch, channels, seq_len) layout
    #[error("Shape error: expected a {expected}-dimensional input, got {got} dimensions")]
    ShapeError { expected: usize, got: usize },
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, GafError>;

//! Signature rendering error types.

use thiserror::Error;

/// Result type for signature operations.
pub type SignatureResult<T> = Result<T, SignatureError>;

/// Errors that can occur when rendering a signature capture.
#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("canvas dimensions must be nonzero (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

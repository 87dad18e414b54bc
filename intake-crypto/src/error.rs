//! Crypto error types.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in identity derivation and envelope encryption.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("decryption failed: {0}")]
    Decryption(String),

    #[error("invalid key material: {0}")]
    InvalidKey(String),

    #[error("armor parse error: {0}")]
    ArmorParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

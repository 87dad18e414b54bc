//! Intake error types.

use thiserror::Error;

/// Result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Errors that can occur in the submission pipeline.
///
/// Every failure is terminal for the current attempt: the caller shows
/// the error and the user resubmits if appropriate.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The user submitted without drawing. Recoverable: the user signs
    /// and resubmits.
    #[error("signature is empty")]
    EmptySignature,

    #[error("public key unavailable: {0}")]
    KeyUnavailable(String),

    /// The acceptor rejected the request; the string is the acceptor's
    /// own message, carried verbatim for display.
    #[error("{0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("encryption error: {0}")]
    Crypto(#[from] intake_crypto::CryptoError),

    #[error("signature rendering error: {0}")]
    Signature(#[from] intake_signature::SignatureError),
}

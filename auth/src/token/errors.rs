use thiserror::Error;

/// Error type for token operations.
///
/// The three rejection variants are deliberately distinct: callers log which
/// check failed but collapse all of them into one client-facing response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token signature verification failed")]
    BadSignature,

    #[error("Token is expired")]
    Expired,
}

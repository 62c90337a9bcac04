use thiserror::Error;

/// Error type for token operations.
///
/// Callers usually collapse every variant into a single "unauthorized"
/// outcome; the variants stay distinct for logging and tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    Signature,

    #[error("Token signing algorithm not allowed: {0}")]
    Algorithm(String),

    #[error("Token is expired")]
    Expired,
}

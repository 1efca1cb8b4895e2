use thiserror::Error;

/// Error type for bearer token operations.
///
/// Verification failures are kept distinct because they drive different
/// user-facing messages: an expired token is reported as expired, everything
/// else as invalid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    Encoding(String),

    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Token is expired")]
    Expired,
}

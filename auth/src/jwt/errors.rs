use thiserror::Error;

/// Error type for JWT operations.
///
/// Verification failures are deliberately not broken down: a malformed,
/// expired, foreign or wrongly signed token is just `InvalidToken`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid")]
    InvalidToken,
}

use thiserror::Error;

/// Authentication failures visible at the HTTP boundary.
///
/// None of these carry a cause: clients learn that access was refused,
/// not why.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid credentials")]
    BadCredentials,
}

impl From<::auth::JwtError> for AuthError {
    fn from(_: ::auth::JwtError) -> Self {
        AuthError::InvalidToken
    }
}

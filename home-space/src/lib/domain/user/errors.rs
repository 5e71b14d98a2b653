use thiserror::Error;

/// Error for user registration.
///
/// Messages are shown to the client as-is, so no variant carries storage
/// detail; the underlying cause is logged where it is translated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("User name is empty")]
    EmptyUserName,

    #[error("User name is already taken: {0}")]
    UserNameTaken(String),

    #[error("User registration unsuccessful")]
    RegistrationFailed,
}

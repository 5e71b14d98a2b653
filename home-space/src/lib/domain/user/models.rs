use std::fmt;

use crate::user::errors::UserError;

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// User name value type
///
/// The only rule is that it is not empty; uniqueness is enforced by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name.
    ///
    /// # Errors
    /// * `EmptyUserName` - The name is the empty string
    pub fn new(user_name: impl Into<String>) -> Result<Self, UserError> {
        let user_name = user_name.into();
        if user_name.is_empty() {
            return Err(UserError::EmptyUserName);
        }
        Ok(Self(user_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind of credential an authentication row links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    Password,
}

impl AuthType {
    /// Row id in the `authentication_types` table.
    pub fn id(self) -> i32 {
        match self {
            AuthType::Password => 1,
        }
    }
}

/// Password credential of a user, as found by user name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredential {
    pub user_id: UserId,
    pub password_hash: Vec<u8>,
}

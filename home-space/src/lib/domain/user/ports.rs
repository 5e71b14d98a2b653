use async_trait::async_trait;

use crate::domain::user::models::StoredCredential;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::user::errors::UserError;

/// Port for registration and login.
#[async_trait]
pub trait UserAuthServicePort: Send + Sync + 'static {
    /// Register a new user with a password.
    ///
    /// # Arguments
    /// * `user_name` - Requested user name
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Identifier of the created user
    ///
    /// # Errors
    /// * `EmptyUserName` - User name is empty (storage is not touched)
    /// * `UserNameTaken` - Another user already has this name
    /// * `RegistrationFailed` - Hashing or storage failed; nothing was persisted
    async fn register(&self, user_name: &str, password: &str) -> Result<UserId, UserError>;

    /// Check a user name and password pair.
    ///
    /// Unknown user and wrong password are indistinguishable: both are `false`.
    async fn check_login(&self, user_name: &str, password: &str) -> bool;

    /// Like `check_login`, but yields the user id on success.
    async fn authenticate(&self, user_name: &str, password: &str) -> Option<UserId>;
}

/// Persistence of users and their password credentials.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Atomically create the user, credential and authentication link rows.
    ///
    /// # Arguments
    /// * `user_name` - Validated user name
    /// * `password_hash` - Already hashed password
    ///
    /// # Returns
    /// Identifier of the created user
    ///
    /// # Errors
    /// * `UserNameTaken` - Unique constraint on the user name failed
    /// * `RegistrationFailed` - Any other storage failure; the transaction
    ///   was rolled back
    async fn register(&self, user_name: &UserName, password_hash: &[u8])
        -> Result<UserId, UserError>;

    /// Find the password credential linked to a user name.
    ///
    /// # Returns
    /// `None` when there is no user, no password credential, or the lookup
    /// itself failed
    async fn find_credential(&self, user_name: &str) -> Option<StoredCredential>;
}

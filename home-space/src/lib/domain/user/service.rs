use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::user::errors::UserError;
use crate::user::ports::UserAuthServicePort;
use crate::user::ports::UserStore;

/// Domain service for registration and login.
///
/// Concrete implementation of UserAuthServicePort with dependency injection.
pub struct UserAuthService<US>
where
    US: UserStore,
{
    store: Arc<US>,
    password_hasher: auth::PasswordHasher,
}

impl<US> UserAuthService<US>
where
    US: UserStore,
{
    /// Create a new service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - User persistence implementation
    /// * `password_hasher` - Hasher configured with the deployment's cost
    pub fn new(store: Arc<US>, password_hasher: auth::PasswordHasher) -> Self {
        Self {
            store,
            password_hasher,
        }
    }
}

#[async_trait]
impl<US> UserAuthServicePort for UserAuthService<US>
where
    US: UserStore,
{
    async fn register(&self, user_name: &str, password: &str) -> Result<UserId, UserError> {
        let user_name = UserName::new(user_name)?;

        let password_hash = self.password_hasher.hash(password).map_err(|e| {
            tracing::error!(user_name = %user_name, error = %e, "Password hashing failed");
            UserError::RegistrationFailed
        })?;

        let user_id = self.store.register(&user_name, &password_hash).await?;
        tracing::info!(user_name = %user_name, user_id = %user_id, "User registered");

        Ok(user_id)
    }

    async fn check_login(&self, user_name: &str, password: &str) -> bool {
        self.authenticate(user_name, password).await.is_some()
    }

    async fn authenticate(&self, user_name: &str, password: &str) -> Option<UserId> {
        let credential = self.store.find_credential(user_name).await?;

        match self
            .password_hasher
            .verify(&credential.password_hash, password)
        {
            Ok(true) => Some(credential.user_id),
            Ok(false) => None,
            Err(e) => {
                tracing::warn!(
                    user_id = %credential.user_id,
                    error = %e,
                    "Stored password hash is unreadable"
                );
                None
            }
        }
    }
}

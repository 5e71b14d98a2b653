use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::Transaction;

use crate::domain::user::models::AuthType;
use crate::domain::user::models::StoredCredential;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserStore;
use crate::user::errors::UserError;

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    user_id: i64,
    hash: Vec<u8>,
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn register(
        &self,
        user_name: &UserName,
        password_hash: &[u8],
    ) -> Result<UserId, UserError> {
        let mut transaction = self.pool.begin().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to open registration transaction");
            UserError::RegistrationFailed
        })?;

        let user_id: i64 = match sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(user_name.as_str())
        .fetch_one(&mut *transaction)
        .await
        {
            Ok(id) => id,
            Err(e) => {
                rollback(transaction).await;
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return Err(UserError::UserNameTaken(user_name.to_string()));
                    }
                }
                tracing::error!(user_name = %user_name, error = %e, "Failed to insert user");
                return Err(UserError::RegistrationFailed);
            }
        };

        let password_id: i64 = match sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO authentication_password (hash)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(password_hash)
        .fetch_one(&mut *transaction)
        .await
        {
            Ok(id) => id,
            Err(e) => {
                rollback(transaction).await;
                tracing::error!(
                    user_name = %user_name,
                    error = %e,
                    "Failed to insert password credential"
                );
                return Err(UserError::RegistrationFailed);
            }
        };

        if let Err(e) = sqlx::query(
            r#"
            INSERT INTO authentication (user_id, auth_type_id, auth_password_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user_id)
        .bind(AuthType::Password.id())
        .bind(password_id)
        .execute(&mut *transaction)
        .await
        {
            rollback(transaction).await;
            tracing::error!(
                user_name = %user_name,
                error = %e,
                "Failed to insert authentication link"
            );
            return Err(UserError::RegistrationFailed);
        }

        // a failed commit leaves the transaction open; dropping it rolls back
        transaction.commit().await.map_err(|e| {
            tracing::error!(user_name = %user_name, error = %e, "Failed to commit registration");
            UserError::RegistrationFailed
        })?;

        Ok(UserId(user_id))
    }

    async fn find_credential(&self, user_name: &str) -> Option<StoredCredential> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT a.user_id, ap.hash
            FROM authentication_password ap
            INNER JOIN authentication a ON a.auth_password_id = ap.id
            INNER JOIN users u ON u.id = a.user_id
            WHERE u.name = $1 AND a.auth_type_id = $2
            "#,
        )
        .bind(user_name)
        .bind(AuthType::Password.id())
        .fetch_optional(&self.pool)
        .await;

        match row {
            Ok(row) => row.map(|r| StoredCredential {
                user_id: UserId(r.user_id),
                password_hash: r.hash,
            }),
            Err(e) => {
                tracing::error!(error = %e, "Failed to look up password credential");
                None
            }
        }
    }
}

async fn rollback(transaction: Transaction<'_, Postgres>) {
    if let Err(e) = transaction.rollback().await {
        tracing::error!(error = %e, "Failed to roll back registration");
    }
}

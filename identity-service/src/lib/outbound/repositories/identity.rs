use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::Role;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::IdentityRepository;

/// Identity persistence over PostgreSQL.
///
/// The `identities` table keys on `username`, so the database itself
/// enforces the uniqueness invariant; `save` surfaces a violated constraint
/// as `UsernameTaken`.
pub struct PostgresIdentityRepository {
    pool: PgPool,
}

impl PostgresIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityRepository for PostgresIdentityRepository {
    async fn find_by_username(&self, username: &Username) -> Result<Option<Identity>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT username, password_hash, role, created_at
            FROM identities
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        row.map(identity_from_row).transpose()
    }

    async fn exists_by_username(&self, username: &Username) -> Result<bool, AuthError> {
        let row = sqlx::query("SELECT 1 FROM identities WHERE username = $1")
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(row.is_some())
    }

    async fn save(&self, identity: Identity) -> Result<Identity, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO identities (username, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(identity.username.as_str())
        .bind(&identity.password_hash)
        .bind(identity.role.as_str())
        .bind(identity.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AuthError::UsernameTaken(identity.username.as_str().to_string());
                }
            }
            AuthError::Database(e.to_string())
        })?;

        Ok(identity)
    }
}

fn identity_from_row(row: PgRow) -> Result<Identity, AuthError> {
    let username: String = row
        .try_get("username")
        .map_err(|e| AuthError::Database(e.to_string()))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| AuthError::Database(e.to_string()))?;
    let role: String = row
        .try_get("role")
        .map_err(|e| AuthError::Database(e.to_string()))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| AuthError::Database(e.to_string()))?;

    Ok(Identity {
        username: Username::new(username)?,
        password_hash,
        // A role tag the service never writes means the row is corrupt.
        role: role
            .parse::<Role>()
            .map_err(|e| AuthError::Database(e.to_string()))?,
        created_at,
    })
}

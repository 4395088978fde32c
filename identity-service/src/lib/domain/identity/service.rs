use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use chrono::Utc;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::CurrentIdentity;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::LoginOutcome;
use crate::domain::identity::models::Role;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::AuthServicePort;
use crate::domain::identity::ports::IdentityRepository;

/// Minimum accepted password length for registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Domain service for credential authentication.
///
/// Orchestrates the credential store, password hasher, and token issuer.
/// This is the only component with cross-cutting policy: which login
/// failures collapse into one client-facing error, where the role on an
/// issued token comes from, and what registration validates before writing.
pub struct AuthService<R>
where
    R: IdentityRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

impl<R> AuthService<R>
where
    R: IdentityRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    /// * `password_hasher` - Configured password hasher
    /// * `token_issuer` - Token issuer holding the process signing key
    pub fn new(
        repository: Arc<R>,
        password_hasher: PasswordHasher,
        token_issuer: TokenIssuer,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_issuer,
        }
    }

    /// Seed an admin identity at startup if the username is absent.
    ///
    /// Existing identities are left untouched, so repeated boots are
    /// idempotent. Losing the save race against a concurrent boot is fine:
    /// the record exists either way.
    ///
    /// # Errors
    /// * `InvalidUsername` / `Password` / `Database` - Seeding failed
    pub async fn ensure_admin(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let username = Username::new(username.to_string())?;

        if self.repository.exists_by_username(&username).await? {
            tracing::debug!(username = %username, "admin identity already present");
            return Ok(());
        }

        let password_hash = self.password_hasher.hash(password)?;
        let identity = Identity {
            username: username.clone(),
            password_hash,
            role: Role::Admin,
            created_at: Utc::now(),
        };

        match self.repository.save(identity).await {
            Ok(_) => {
                tracing::info!(username = %username, "admin identity created");
                Ok(())
            }
            Err(AuthError::UsernameTaken(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: IdentityRepository,
{
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let username = match Username::new(username.to_string()) {
            Ok(username) => username,
            Err(_) => {
                tracing::info!(reason = "blank_username", "login rejected");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let identity = match self.repository.find_by_username(&username).await? {
            Some(identity) => identity,
            None => {
                tracing::info!(username = %username, reason = "unknown_username", "login rejected");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self
            .password_hasher
            .verify(password, &identity.password_hash)?
        {
            tracing::info!(username = %username, reason = "password_mismatch", "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        // Role comes from the stored record, never from the request.
        let token =
            self.token_issuer
                .issue(identity.username.as_str(), identity.role.as_str(), Utc::now())?;

        tracing::info!(username = %identity.username, role = %identity.role, "login succeeded");

        Ok(LoginOutcome {
            token,
            username: identity.username.as_str().to_string(),
            role: identity.role,
        })
    }

    async fn register(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let username = Username::new(username.to_string())?;

        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        // Fast path; the storage uniqueness constraint checked by `save` is
        // the authoritative conflict signal under concurrent registrations.
        if self.repository.exists_by_username(&username).await? {
            return Err(AuthError::UsernameTaken(username.to_string()));
        }

        let password_hash = self.password_hasher.hash(password)?;

        let identity = Identity {
            username,
            password_hash,
            role: Role::User,
            created_at: Utc::now(),
        };

        let identity = self.repository.save(identity).await?;
        tracing::info!(username = %identity.username, "identity registered");

        Ok(identity)
    }

    fn current_identity(&self, claims: &auth::Claims) -> Result<CurrentIdentity, AuthError> {
        let role = claims.role.parse::<Role>()?;

        Ok(CurrentIdentity {
            username: claims.sub.clone(),
            role,
        })
    }
}

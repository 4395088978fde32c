use async_trait::async_trait;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::CurrentIdentity;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::LoginOutcome;
use crate::domain::identity::models::Username;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a bearer token.
    ///
    /// An unknown username and a wrong password both fail with
    /// `InvalidCredentials`; which one occurred is only recorded in server
    /// logs. The role in the issued token comes from the stored identity,
    /// never from the caller.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No such user, or password does not match
    /// * `Password` / `Token` / `Database` - Infrastructure fault
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AuthError>;

    /// Validate input, hash the password, and persist a new identity with
    /// the default `USER` role.
    ///
    /// Validation and the conflict check happen before any write; a failed
    /// registration never leaves a partial record behind.
    ///
    /// # Errors
    /// * `InvalidUsername` - Username is empty or whitespace-only
    /// * `PasswordTooShort` - Password is below the minimum length
    /// * `UsernameTaken` - Username is already registered
    /// * `Password` / `Database` - Infrastructure fault
    async fn register(&self, username: &str, password: &str) -> Result<Identity, AuthError>;

    /// Resolve an already-validated claim set into the current identity.
    ///
    /// Trusts the claims as-is and does not touch the credential store.
    ///
    /// # Errors
    /// * `InvalidClaims` - The role tag in the claims is not one this
    ///   service issues
    fn current_identity(&self, claims: &auth::Claims) -> Result<CurrentIdentity, AuthError>;
}

/// Persistence port for identity records.
///
/// The storage layer must enforce username uniqueness; `save` reports a
/// violated constraint as `UsernameTaken`, which is the authoritative
/// conflict signal under concurrent registrations.
#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    /// Retrieve an identity by username.
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<Identity>, AuthError>;

    /// Check whether an identity with this username exists.
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn exists_by_username(&self, username: &Username) -> Result<bool, AuthError>;

    /// Persist a new identity.
    ///
    /// # Errors
    /// * `UsernameTaken` - The storage uniqueness constraint was violated
    /// * `Database` - Storage operation failed
    async fn save(&self, identity: Identity) -> Result<Identity, AuthError>;
}

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::IdentityRepository;

/// In-memory identity store.
///
/// Implements the same port and the same conflict semantics as the Postgres
/// adapter (duplicate save is `UsernameTaken`). Backs the integration tests
/// and database-less local runs; contents are lost on shutdown.
pub struct InMemoryIdentityRepository {
    identities: RwLock<HashMap<String, Identity>>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self {
            identities: RwLock::new(HashMap::new()),
        }
    }

    fn poisoned(&self) -> AuthError {
        AuthError::Database("identity store lock poisoned".to_string())
    }
}

impl Default for InMemoryIdentityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_username(&self, username: &Username) -> Result<Option<Identity>, AuthError> {
        let identities = self.identities.read().map_err(|_| self.poisoned())?;
        Ok(identities.get(username.as_str()).cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> Result<bool, AuthError> {
        let identities = self.identities.read().map_err(|_| self.poisoned())?;
        Ok(identities.contains_key(username.as_str()))
    }

    async fn save(&self, identity: Identity) -> Result<Identity, AuthError> {
        let mut identities = self.identities.write().map_err(|_| self.poisoned())?;

        if identities.contains_key(identity.username.as_str()) {
            return Err(AuthError::UsernameTaken(
                identity.username.as_str().to_string(),
            ));
        }

        identities.insert(identity.username.as_str().to_string(), identity.clone());
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::identity::models::Role;

    fn identity(username: &str) -> Identity {
        Identity {
            username: Username::new(username.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repository = InMemoryIdentityRepository::new();
        let username = Username::new("alice".to_string()).unwrap();

        assert!(!repository.exists_by_username(&username).await.unwrap());
        assert!(repository
            .find_by_username(&username)
            .await
            .unwrap()
            .is_none());

        repository.save(identity("alice")).await.unwrap();

        assert!(repository.exists_by_username(&username).await.unwrap());
        let found = repository
            .find_by_username(&username)
            .await
            .unwrap()
            .expect("saved identity should be found");
        assert_eq!(found.username, username);
    }

    #[tokio::test]
    async fn test_duplicate_save_is_conflict() {
        let repository = InMemoryIdentityRepository::new();

        repository.save(identity("alice")).await.unwrap();
        let result = repository.save(identity("alice")).await;

        assert!(matches!(result, Err(AuthError::UsernameTaken(_))));
    }

    #[tokio::test]
    async fn test_usernames_are_case_sensitive() {
        let repository = InMemoryIdentityRepository::new();

        repository.save(identity("alice")).await.unwrap();
        repository.save(identity("Alice")).await.unwrap();

        let upper = Username::new("Alice".to_string()).unwrap();
        assert!(repository.exists_by_username(&upper).await.unwrap());
    }
}

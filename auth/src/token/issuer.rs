use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::TokenError;

/// Builds and signs bearer tokens.
///
/// Holds the process signing key and the fixed token lifetime; both are set
/// once at construction and never change afterwards. Issuance is a pure
/// function of its inputs plus the key, so the issuer can be shared across
/// requests without coordination.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Secret key for HMAC signing (at least 32 bytes for HS256)
    /// * `ttl` - Lifetime of every issued token
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Issue a signed token for `subject` with the given role.
    ///
    /// Claims are `{sub: subject, role, iat: now, exp: now + ttl}`. Two calls
    /// with identical inputs at different instants produce different tokens.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn issue(
        &self,
        subject: &str,
        role: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(subject, role, now, self.ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_produces_compact_jwt() {
        let issuer = TokenIssuer::new(SECRET, Duration::minutes(15));

        let token = issuer
            .issue("alice", "USER", Utc::now())
            .expect("Failed to issue token");

        // header.payload.signature
        assert_eq!(token.split('.').count(), 3);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'));
    }

    #[test]
    fn test_issue_at_different_instants_differs() {
        let issuer = TokenIssuer::new(SECRET, Duration::minutes(15));
        let now = Utc::now();

        let first = issuer.issue("alice", "USER", now).unwrap();
        let second = issuer
            .issue("alice", "USER", now + Duration::seconds(1))
            .unwrap();

        assert_ne!(first, second);
    }
}

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an access token.
///
/// Every field is required: a token missing any of them fails validation as
/// malformed. The signature binds the whole set, so no claim can be altered
/// after issuance without invalidating the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the authenticated username.
    pub sub: String,

    /// Role tag attached at issuance (e.g. `ADMIN`, `USER`).
    pub role: String,

    /// Issued at (Unix timestamp, seconds).
    pub iat: i64,

    /// Expiration (Unix timestamp, seconds).
    pub exp: i64,
}

impl Claims {
    /// Build the claim set for a token issued at `now` with lifetime `ttl`.
    pub fn new(subject: &str, role: &str, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: subject.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Check whether the token is expired at the given instant.
    ///
    /// The boundary is closed: a token is already expired at exactly `exp`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let now = Utc::now();
        let claims = Claims::new("alice", "USER", now, Duration::minutes(15));

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, "USER");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_is_expired_boundaries() {
        let issued = Utc::now();
        let ttl = Duration::seconds(60);
        let claims = Claims::new("alice", "USER", issued, ttl);

        assert!(!claims.is_expired(issued));
        assert!(!claims.is_expired(issued + Duration::seconds(59)));
        assert!(claims.is_expired(issued + ttl));
        assert!(claims.is_expired(issued + Duration::seconds(61)));
    }
}

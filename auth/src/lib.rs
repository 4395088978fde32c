//! Authentication primitives library
//!
//! Provides the reusable core of the credential-authentication flow:
//! - Password hashing and verification (Argon2id, tunable work factor)
//! - Bearer-token issuance and validation (JWT, HS256, fixed TTL)
//!
//! Persistence and HTTP concerns live in the consuming service; this crate
//! is pure computation over its inputs plus the injected key material.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{TokenIssuer, TokenValidator};
//! use chrono::{Duration, Utc};
//!
//! let secret = b"secret_key_at_least_32_bytes_long!";
//! let issuer = TokenIssuer::new(secret, Duration::minutes(15));
//! let validator = TokenValidator::new(secret);
//!
//! let now = Utc::now();
//! let token = issuer.issue("alice", "USER", now).unwrap();
//! let claims = validator.validate(&token, now).unwrap();
//! assert_eq!(claims.sub, "alice");
//! assert_eq!(claims.role, "USER");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenValidator;

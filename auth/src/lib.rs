//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the cinema service:
//! - Password hashing (Argon2id)
//! - Bearer token issuance and verification (JWT, HS256)
//! - Credential exchange coordination
//!
//! The service defines its own domain traits and adapts these implementations
//! at the composition root, keeping this crate free of domain types.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenHandler;
//!
//! let handler = TokenHandler::new(b"secret_key_at_least_32_bytes_long!", 2);
//! let token = handler.issue("alice1").unwrap();
//! let claims = handler.verify(&token).unwrap();
//! assert_eq!(claims.sub, "alice1");
//! ```
//!
//! ## Credential Exchange
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 2);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token
//! let token = auth.login("password123", &hash, "alice1").unwrap();
//!
//! // Guard: verify the presented token
//! let claims = auth.verify_token(&token).unwrap();
//! assert_eq!(claims.sub, "alice1");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenHandler;

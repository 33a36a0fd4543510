use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenError;
use crate::token::TokenHandler;

/// Authentication coordinator combining password verification and token issuance.
///
/// Provides the credential-exchange operation: a token is only ever issued
/// for a username whose password was just verified.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_handler: TokenHandler,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_lifetime_hours` - Lifetime of issued tokens in hours
    pub fn new(jwt_secret: &[u8], token_lifetime_hours: i64) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_handler: TokenHandler::new(jwt_secret, token_lifetime_hours),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password attempt
    /// * `stored_hash` - Stored password hash
    /// * `username` - Username to embed as the token subject
    ///
    /// # Returns
    /// Signed bearer token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `Token` - Token issuance failed
    pub fn login(
        &self,
        password: &str,
        stored_hash: &str,
        username: &str,
    ) -> Result<String, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_handler.issue(username)?)
    }

    /// Verify a presented bearer token.
    ///
    /// # Arguments
    /// * `token` - JWT string from the Authorization header
    ///
    /// # Returns
    /// Decoded claims on success
    ///
    /// # Errors
    /// * `TokenError` - Token is expired, malformed, or its signature fails
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_handler.verify(token)
    }
}

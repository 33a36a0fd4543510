use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Bearer token issuer and verifier.
///
/// Issues HS256-signed tokens with a fixed lifetime and verifies signature
/// and expiry of presented tokens. Verification is pure computation.
pub struct TokenHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime_hours: i64,
}

impl TokenHandler {
    /// Create a new token handler.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `lifetime_hours` - Lifetime of issued tokens in hours
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], lifetime_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            lifetime_hours,
        }
    }

    /// Issue a signed token for an authenticated username.
    ///
    /// The caller is responsible for having verified the user's credentials
    /// first; this only encodes and signs.
    ///
    /// # Arguments
    /// * `username` - Authenticated username to embed as subject
    ///
    /// # Returns
    /// Signed JWT string
    ///
    /// # Errors
    /// * `Signing` - Token encoding failed
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        let claims = Claims::for_user(username, self.lifetime_hours);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a presented token's signature and expiry.
    ///
    /// # Arguments
    /// * `token` - JWT string to verify
    ///
    /// # Returns
    /// Decoded claims, the subject being the authenticated identity
    ///
    /// # Errors
    /// * `Expired` - Token expiry has passed
    /// * `Malformed` - Token cannot be parsed or its signature does not verify
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

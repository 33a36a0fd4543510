use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a cinema-service bearer token.
///
/// The subject is the authenticated username; `iat`/`exp` bound the token's
/// lifetime. Nothing else is encoded, so verification needs no store lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the authenticated username
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a freshly authenticated user.
    ///
    /// # Arguments
    /// * `username` - Authenticated username
    /// * `lifetime_hours` - Hours until the token expires
    pub fn for_user(username: &str, lifetime_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(lifetime_hours);

        Self {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}

use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use uuid::Uuid;

use crate::movie::models::MovieId;
use crate::user::errors::EmailError;
use crate::user::errors::UserIdError;
use crate::user::errors::UsernameError;

/// User aggregate entity.
///
/// Represents a registered account together with its favorite-movie set.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub birthday: Option<NaiveDate>,
    pub favorite_movie_ids: Vec<MovieId>,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Account validation policy.
///
/// The username minimum is a deployment decision, so it arrives from
/// configuration rather than living in a constant.
#[derive(Debug, Clone, Copy)]
pub struct AccountPolicy {
    pub username_min_length: usize,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            username_min_length: 5,
        }
    }
}

/// Username value type
///
/// Usernames are alphanumeric only, at least the policy minimum long and at
/// most 32 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 32;

    /// Create a new valid username.
    ///
    /// # Arguments
    /// * `username` - Raw username string
    /// * `policy` - Account policy carrying the minimum length
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than the policy minimum
    /// * `TooLong` - Username longer than 32 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters
    pub fn new(username: String, policy: &AccountPolicy) -> Result<Self, UsernameError> {
        let username = Self::with_valid_length(username, policy)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username))
    }

    fn with_valid_length(
        username: String,
        policy: &AccountPolicy,
    ) -> Result<String, UsernameError> {
        let length = username.chars().count();
        if length < policy.username_min_length {
            Err(UsernameError::TooShort {
                min: policy.username_min_length,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(username)
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username.chars().all(|c| c.is_alphanumeric()) {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    /// Reconstitute a username read back from storage.
    ///
    /// Creation policy is not re-applied: tightening the minimum length must
    /// not make accounts registered under the old policy unreadable.
    pub(crate) fn from_stored(username: String) -> Self {
        Self(username)
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a new user with domain types.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
    pub birthday: Option<NaiveDate>,
}

impl RegisterUserCommand {
    /// Construct a new registration command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `email` - Validated email address
    /// * `password` - Plain text password (hashed by the service)
    /// * `birthday` - Optional date of birth
    pub fn new(
        username: Username,
        email: EmailAddress,
        password: String,
        birthday: Option<NaiveDate>,
    ) -> Self {
        Self {
            username,
            email,
            password,
            birthday,
        }
    }
}

/// Command to replace an existing user's account fields.
///
/// PUT semantics: every field is written; an absent birthday clears it.
#[derive(Debug)]
pub struct ReplaceUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
    pub birthday: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        let policy = AccountPolicy::default();
        let username = Username::new("alice1".to_string(), &policy).unwrap();
        assert_eq!(username.as_str(), "alice1");
    }

    #[test]
    fn test_username_too_short() {
        let policy = AccountPolicy::default();
        let result = Username::new("bob".to_string(), &policy);
        assert!(matches!(
            result,
            Err(UsernameError::TooShort { min: 5, actual: 3 })
        ));
    }

    #[test]
    fn test_username_min_length_is_policy_driven() {
        let policy = AccountPolicy {
            username_min_length: 4,
        };
        assert!(Username::new("anna".to_string(), &policy).is_ok());
        assert!(Username::new("ann".to_string(), &policy).is_err());
    }

    #[test]
    fn test_username_rejects_non_alphanumeric() {
        let policy = AccountPolicy::default();
        for raw in ["alice_1", "alice-1", "alice 1", "alice!"] {
            let result = Username::new(raw.to_string(), &policy);
            assert!(
                matches!(result, Err(UsernameError::InvalidCharacters)),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_username_too_long() {
        let policy = AccountPolicy::default();
        let result = Username::new("a".repeat(33), &policy);
        assert!(matches!(result, Err(UsernameError::TooLong { .. })));
    }

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("a@b.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "a@b.com");
    }

    #[test]
    fn test_email_invalid() {
        let result = EmailAddress::new("not-an-email".to_string());
        assert!(matches!(result, Err(EmailError::InvalidFormat(_))));
    }
}

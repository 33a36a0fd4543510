use thiserror::Error;

/// Error type for bearer token operations.
///
/// `Missing` is produced by callers that fail to find a token on the request;
/// it lives here so the whole token failure taxonomy is one type.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("No bearer token presented")]
    Missing,

    #[error("Token is expired")]
    Expired,

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token signing failed: {0}")]
    Signing(String),
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Credential exchange: verified username + password for a bearer token.
///
/// An unknown username, an invalid one and a wrong password all produce the
/// same response, so the endpoint cannot be used to enumerate accounts.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    let username = Username::new(body.username, &state.policy)
        .map_err(|_| invalid_credentials())?;

    let user = state
        .user_service
        .get_user(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFound(_) => invalid_credentials(),
            _ => ApiError::from(e),
        })?;

    let token = state
        .authenticator
        .login(&body.password, &user.password_hash, user.username.as_str())
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => invalid_credentials(),
            auth::AuthenticationError::Password(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::Token(err) => {
                ApiError::InternalServerError(format!("Token issuance failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            user: (&user).into(),
            token,
        },
    ))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid credentials".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticateResponseData {
    pub user: UserData,
    pub token: String,
}

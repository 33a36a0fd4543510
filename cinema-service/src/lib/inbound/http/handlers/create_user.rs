use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::FieldViolation;
use super::UserData;
use crate::inbound::http::router::AppState;
use crate::user::models::AccountPolicy;
use crate::user::models::EmailAddress;
use crate::user::models::RegisterUserCommand;
use crate::user::models::Username;

/// Public registration endpoint.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let command = body
        .try_into_command(&state.policy)
        .map_err(ApiError::Validation)?;

    state
        .user_service
        .register_user(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    username: String,
    password: String,
    email: String,
    birthday: Option<NaiveDate>,
}

impl CreateUserRequest {
    /// Validate all fields, reporting every violation rather than the first.
    fn try_into_command(
        self,
        policy: &AccountPolicy,
    ) -> Result<RegisterUserCommand, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let username = Username::new(self.username, policy)
            .map_err(|e| violations.push(FieldViolation::new("username", e.to_string())))
            .ok();

        let email = EmailAddress::new(self.email)
            .map_err(|e| violations.push(FieldViolation::new("email", e.to_string())))
            .ok();

        if self.password.is_empty() {
            violations.push(FieldViolation::new("password", "Password must not be empty"));
        }

        match (username, email, violations.is_empty()) {
            (Some(username), Some(email), true) => Ok(RegisterUserCommand::new(
                username,
                email,
                self.password,
                self.birthday,
            )),
            _ => Err(violations),
        }
    }
}

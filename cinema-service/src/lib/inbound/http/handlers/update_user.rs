use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::FieldViolation;
use super::UserData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::models::AccountPolicy;
use crate::user::models::EmailAddress;
use crate::user::models::ReplaceUserCommand;
use crate::user::models::Username;

/// Full account replacement (PUT semantics).
///
/// Every field is written; the body is validated exactly as at registration.
pub async fn update_user(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedUser>,
    Path(username): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let username = Username::new(username, &state.policy)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    tracing::info!(actor = %actor.username, target = %username, "Replacing user account");

    let command = body
        .try_into_command(&state.policy)
        .map_err(ApiError::Validation)?;

    state
        .user_service
        .replace_user(&username, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

/// HTTP request body for account replacement (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateUserRequest {
    username: String,
    password: String,
    email: String,
    birthday: Option<NaiveDate>,
}

impl UpdateUserRequest {
    /// Validate all fields, reporting every violation rather than the first.
    fn try_into_command(
        self,
        policy: &AccountPolicy,
    ) -> Result<ReplaceUserCommand, Vec<FieldViolation>> {
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
            (Some(username), Some(email), true) => Ok(ReplaceUserCommand {
                username,
                email,
                password: self.password,
                birthday: self.birthday,
            }),
            _ => Err(violations),
        }
    }
}

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::models::Username;

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedUser>,
    Path(username): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let username = Username::new(username, &state.policy)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    tracing::info!(actor = %actor.username, target = %username, "Deleting user");

    state
        .user_service
        .delete_user(&username)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

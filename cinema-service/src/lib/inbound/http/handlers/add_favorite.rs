use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::router::AppState;
use crate::movie::models::MovieId;
use crate::user::models::Username;

/// Add a movie to a user's favorites set.
///
/// Idempotent: repeating the call with the same id changes nothing.
pub async fn add_favorite(
    State(state): State<AppState>,
    Path((username, movie_id)): Path<(String, String)>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let username = Username::new(username, &state.policy)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let movie_id =
        MovieId::from_string(&movie_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .user_service
        .add_favorite(&username, &movie_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

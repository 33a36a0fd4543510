use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::DirectorData;
use crate::inbound::http::router::AppState;

/// Director sub-record of the first movie carrying the director name.
pub async fn get_director(
    State(state): State<AppState>,
    Path(director_name): Path<String>,
) -> Result<ApiSuccess<DirectorData>, ApiError> {
    state
        .movie_service
        .get_director(&director_name)
        .await
        .map_err(ApiError::from)
        .map(|ref director| ApiSuccess::new(StatusCode::OK, director.into()))
}

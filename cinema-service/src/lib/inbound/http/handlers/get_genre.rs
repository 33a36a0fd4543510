use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::GenreData;
use crate::inbound::http::router::AppState;

/// Genre sub-record of the first movie carrying the genre name.
pub async fn get_genre(
    State(state): State<AppState>,
    Path(genre_name): Path<String>,
) -> Result<ApiSuccess<GenreData>, ApiError> {
    state
        .movie_service
        .get_genre(&genre_name)
        .await
        .map_err(ApiError::from)
        .map(|ref genre| ApiSuccess::new(StatusCode::OK, genre.into()))
}

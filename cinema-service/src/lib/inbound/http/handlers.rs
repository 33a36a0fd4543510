use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;

use crate::movie::errors::MovieError;
use crate::movie::models::Director;
use crate::movie::models::Genre;
use crate::movie::models::Movie;
use crate::user::errors::UserError;
use crate::user::models::User;

pub mod add_favorite;
pub mod authenticate;
pub mod create_user;
pub mod delete_user;
pub mod get_director;
pub mod get_genre;
pub mod get_movie;
pub mod get_user;
pub mod list_movies;
pub mod list_users;
pub mod remove_favorite;
pub mod update_user;
pub mod welcome;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// One failing field in a validation error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    /// Field-level validation failure carrying every failing field.
    Validation(Vec<FieldViolation>),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(detail) => {
                // Detail goes to the log only; the caller gets a generic body.
                tracing::error!(error = %detail, "Internal server error");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (
                    status,
                    Json(ApiResponseBody::new_error(
                        status,
                        "Internal server error".to_string(),
                    )),
                )
                    .into_response()
            }
            ApiError::Validation(violations) => {
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                (
                    status,
                    Json(ApiResponseBody::new_validation(status, violations)),
                )
                    .into_response()
            }
            ApiError::UnprocessableEntity(message) => {
                error_response(StatusCode::UNPROCESSABLE_ENTITY, message)
            }
            ApiError::BadRequest(message) => error_response(StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => error_response(StatusCode::NOT_FOUND, message),
            ApiError::Conflict(message) => error_response(StatusCode::CONFLICT, message),
            ApiError::Unauthorized(message) => error_response(StatusCode::UNAUTHORIZED, message),
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ApiResponseBody::new_error(status, message))).into_response()
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidUserId(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::PasswordHashing(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<MovieError> for ApiError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::NotFoundByTitle(_)
            | MovieError::NotFoundByGenre(_)
            | MovieError::NotFoundByDirector(_) => ApiError::NotFound(err.to_string()),
            MovieError::InvalidMovieId(_) => ApiError::BadRequest(err.to_string()),
            MovieError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<auth::TokenError> for ApiError {
    fn from(err: auth::TokenError) -> Self {
        match err {
            auth::TokenError::Signing(detail) => ApiError::InternalServerError(detail),
            _ => ApiError::Unauthorized(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData {
                message,
                errors: None,
            },
        }
    }

    pub fn new_validation(status_code: StatusCode, violations: Vec<FieldViolation>) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData {
                message: "Validation failed".to_string(),
                errors: Some(violations),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

/// User representation returned to callers.
///
/// The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub birthday: Option<NaiveDate>,
    pub favorite_movie_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            birthday: user.birthday,
            favorite_movie_ids: user
                .favorite_movie_ids
                .iter()
                .map(|id| id.to_string())
                .collect(),
            created_at: user.created_at,
        }
    }
}

/// Movie representation returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub genre: GenreData,
    pub director: DirectorData,
    pub image_url: String,
    pub release_year: i32,
    pub featured: bool,
}

impl From<&Movie> for MovieData {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title.clone(),
            description: movie.description.clone(),
            genre: (&movie.genre).into(),
            director: (&movie.director).into(),
            image_url: movie.image_url.clone(),
            release_year: movie.release_year,
            featured: movie.featured,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreData {
    pub name: String,
    pub description: String,
}

impl From<&Genre> for GenreData {
    fn from(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
            description: genre.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorData {
    pub name: String,
    pub bio: String,
    pub birth_year: i32,
    pub death_year: Option<i32>,
}

impl From<&Director> for DirectorData {
    fn from(director: &Director) -> Self {
        Self {
            name: director.name.clone(),
            bio: director.bio.clone(),
            birth_year: director.birth_year,
            death_year: director.death_year,
        }
    }
}

use thiserror::Error;

/// Error for MovieId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for movie catalog operations
#[derive(Debug, Clone, Error)]
pub enum MovieError {
    #[error("Invalid movie ID: {0}")]
    InvalidMovieId(#[from] MovieIdError),

    #[error("No movie found with title: {0}")]
    NotFoundByTitle(String),

    #[error("No movie found with genre: {0}")]
    NotFoundByGenre(String),

    #[error("No movie found with director: {0}")]
    NotFoundByDirector(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

use async_trait::async_trait;

use crate::movie::errors::MovieError;
use crate::movie::models::Director;
use crate::movie::models::Genre;
use crate::movie::models::Movie;

/// Port for movie catalog service operations.
///
/// The catalog is read-only; all operations are lookups.
#[async_trait]
pub trait MovieServicePort: Send + Sync + 'static {
    /// Retrieve the full movie catalog.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError>;

    /// Retrieve one movie by exact title.
    ///
    /// # Errors
    /// * `NotFoundByTitle` - No movie with this title
    /// * `DatabaseError` - Store operation failed
    async fn get_movie_by_title(&self, title: &str) -> Result<Movie, MovieError>;

    /// Retrieve the genre sub-record of the first movie matching a genre name.
    ///
    /// # Errors
    /// * `NotFoundByGenre` - No movie carries this genre
    /// * `DatabaseError` - Store operation failed
    async fn get_genre(&self, genre_name: &str) -> Result<Genre, MovieError>;

    /// Retrieve the director sub-record of the first movie matching a director name.
    ///
    /// # Errors
    /// * `NotFoundByDirector` - No movie carries this director
    /// * `DatabaseError` - Store operation failed
    async fn get_director(&self, director_name: &str) -> Result<Director, MovieError>;
}

/// Persistence operations for the read-only movie catalog.
#[async_trait]
pub trait MovieRepository: Send + Sync + 'static {
    /// Retrieve all movies from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError>;

    /// Retrieve a movie by exact title.
    ///
    /// # Returns
    /// Optional movie entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, MovieError>;

    /// Retrieve the first movie whose genre carries the given name.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_first_by_genre(&self, genre_name: &str) -> Result<Option<Movie>, MovieError>;

    /// Retrieve the first movie whose director carries the given name.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_first_by_director(
        &self,
        director_name: &str,
    ) -> Result<Option<Movie>, MovieError>;
}

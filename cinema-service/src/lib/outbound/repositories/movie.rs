use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::movie::errors::MovieError;
use crate::movie::models::Director;
use crate::movie::models::Genre;
use crate::movie::models::Movie;
use crate::movie::models::MovieId;
use crate::movie::ports::MovieRepository;

const MOVIE_COLUMNS: &str = "id, title, description, genre_name, genre_description, \
     director_name, director_bio, director_birth_year, director_death_year, \
     image_url, release_year, featured";

pub struct PostgresMovieRepository {
    pool: PgPool,
}

impl PostgresMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape for the `movies` table.
///
/// Genre and director sub-records are stored denormalized on the movie row,
/// mirroring the embedded documents of the source catalog.
#[derive(sqlx::FromRow)]
struct MovieRow {
    id: Uuid,
    title: String,
    description: String,
    genre_name: String,
    genre_description: String,
    director_name: String,
    director_bio: String,
    director_birth_year: i32,
    director_death_year: Option<i32>,
    image_url: String,
    release_year: i32,
    featured: bool,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: MovieId(row.id),
            title: row.title,
            description: row.description,
            genre: Genre {
                name: row.genre_name,
                description: row.genre_description,
            },
            director: Director {
                name: row.director_name,
                bio: row.director_bio,
                birth_year: row.director_birth_year,
                death_year: row.director_death_year,
            },
            image_url: row.image_url,
            release_year: row.release_year,
            featured: row.featured,
        }
    }
}

fn database_error(e: sqlx::Error) -> MovieError {
    MovieError::DatabaseError(e.to_string())
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        let rows: Vec<MovieRow> = sqlx::query_as(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies ORDER BY title"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, MovieError> {
        let row: Option<MovieRow> = sqlx::query_as(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE title = $1"
        ))
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(Movie::from))
    }

    async fn find_first_by_genre(&self, genre_name: &str) -> Result<Option<Movie>, MovieError> {
        let row: Option<MovieRow> = sqlx::query_as(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE genre_name = $1 ORDER BY title LIMIT 1"
        ))
        .bind(genre_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(Movie::from))
    }

    async fn find_first_by_director(
        &self,
        director_name: &str,
    ) -> Result<Option<Movie>, MovieError> {
        let row: Option<MovieRow> = sqlx::query_as(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE director_name = $1 ORDER BY title LIMIT 1"
        ))
        .bind(director_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(Movie::from))
    }
}

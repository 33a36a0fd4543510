use std::sync::Arc;

use async_trait::async_trait;

use crate::movie::errors::MovieError;
use crate::movie::models::Director;
use crate::movie::models::Genre;
use crate::movie::models::Movie;
use crate::movie::ports::MovieRepository;
use crate::movie::ports::MovieServicePort;

/// Domain service implementation for movie catalog reads.
pub struct MovieService<MR>
where
    MR: MovieRepository,
{
    repository: Arc<MR>,
}

impl<MR> MovieService<MR>
where
    MR: MovieRepository,
{
    /// Create a new movie service with an injected catalog repository.
    pub fn new(repository: Arc<MR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<MR> MovieServicePort for MovieService<MR>
where
    MR: MovieRepository,
{
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError> {
        self.repository.list_all().await
    }

    async fn get_movie_by_title(&self, title: &str) -> Result<Movie, MovieError> {
        self.repository
            .find_by_title(title)
            .await?
            .ok_or_else(|| MovieError::NotFoundByTitle(title.to_string()))
    }

    async fn get_genre(&self, genre_name: &str) -> Result<Genre, MovieError> {
        self.repository
            .find_first_by_genre(genre_name)
            .await?
            .map(|movie| movie.genre)
            .ok_or_else(|| MovieError::NotFoundByGenre(genre_name.to_string()))
    }

    async fn get_director(&self, director_name: &str) -> Result<Director, MovieError> {
        self.repository
            .find_first_by_director(director_name)
            .await?
            .map(|movie| movie.director)
            .ok_or_else(|| MovieError::NotFoundByDirector(director_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::movie::models::MovieId;

    mock! {
        pub TestMovieRepository {}

        #[async_trait]
        impl MovieRepository for TestMovieRepository {
            async fn list_all(&self) -> Result<Vec<Movie>, MovieError>;
            async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, MovieError>;
            async fn find_first_by_genre(&self, genre_name: &str) -> Result<Option<Movie>, MovieError>;
            async fn find_first_by_director(&self, director_name: &str) -> Result<Option<Movie>, MovieError>;
        }
    }

    fn sample_movie() -> Movie {
        Movie {
            id: MovieId::new(),
            title: "Inception".to_string(),
            description: "A professional thief steals information by infiltrating the subconscious of his targets.".to_string(),
            genre: Genre {
                name: "science fiction".to_string(),
                description: "Speculative, fictional science-based depictions of phenomena.".to_string(),
            },
            director: Director {
                name: "Christopher Nolan".to_string(),
                bio: "British-American filmmaker known for complex storytelling.".to_string(),
                birth_year: 1970,
                death_year: None,
            },
            image_url: "https://pixabay.com/images/id-3265473/".to_string(),
            release_year: 2010,
            featured: true,
        }
    }

    #[tokio::test]
    async fn test_list_movies() {
        let mut repository = MockTestMovieRepository::new();
        repository
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![sample_movie()]));

        let service = MovieService::new(Arc::new(repository));

        let movies = service.list_movies().await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Inception");
    }

    #[tokio::test]
    async fn test_get_movie_by_title_success() {
        let mut repository = MockTestMovieRepository::new();
        repository
            .expect_find_by_title()
            .withf(|title| title == "Inception")
            .times(1)
            .returning(|_| Ok(Some(sample_movie())));

        let service = MovieService::new(Arc::new(repository));

        let movie = service.get_movie_by_title("Inception").await.unwrap();
        assert_eq!(movie.release_year, 2010);
    }

    #[tokio::test]
    async fn test_get_movie_by_title_not_found() {
        let mut repository = MockTestMovieRepository::new();
        repository
            .expect_find_by_title()
            .times(1)
            .returning(|_| Ok(None));

        let service = MovieService::new(Arc::new(repository));

        let result = service.get_movie_by_title("Unknown").await;
        assert!(matches!(result, Err(MovieError::NotFoundByTitle(_))));
    }

    #[tokio::test]
    async fn test_get_genre_returns_sub_record_of_first_match() {
        let mut repository = MockTestMovieRepository::new();
        repository
            .expect_find_first_by_genre()
            .withf(|name| name == "science fiction")
            .times(1)
            .returning(|_| Ok(Some(sample_movie())));

        let service = MovieService::new(Arc::new(repository));

        let genre = service.get_genre("science fiction").await.unwrap();
        assert_eq!(genre.name, "science fiction");
    }

    #[tokio::test]
    async fn test_get_director_not_found() {
        let mut repository = MockTestMovieRepository::new();
        repository
            .expect_find_first_by_director()
            .times(1)
            .returning(|_| Ok(None));

        let service = MovieService::new(Arc::new(repository));

        let result = service.get_director("Nobody").await;
        assert!(matches!(result, Err(MovieError::NotFoundByDirector(_))));
    }
}

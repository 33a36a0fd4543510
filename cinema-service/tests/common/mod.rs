use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use cinema_service::domain::movie::errors::MovieError;
use cinema_service::domain::movie::models::Director;
use cinema_service::domain::movie::models::Genre;
use cinema_service::domain::movie::models::Movie;
use cinema_service::domain::movie::models::MovieId;
use cinema_service::domain::movie::ports::MovieRepository;
use cinema_service::domain::movie::service::MovieService;
use cinema_service::domain::user::errors::UserError;
use cinema_service::domain::user::models::AccountPolicy;
use cinema_service::domain::user::models::User;
use cinema_service::domain::user::models::Username;
use cinema_service::domain::user::ports::UserRepository;
use cinema_service::domain::user::service::UserService;
use cinema_service::inbound::http::router::create_router;
use serde_json::json;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory stores.
///
/// The document store is an external collaborator, so the black-box suite
/// swaps it for in-memory adapters and exercises everything above them.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub user_repo: Arc<InMemoryUserRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repo = Arc::new(InMemoryUserRepository::new());
        let movie_repo = Arc::new(InMemoryMovieRepository::seeded());

        let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));
        let movie_service = Arc::new(MovieService::new(movie_repo));

        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET, 2));

        let router = create_router(
            user_service,
            movie_service,
            authenticator,
            AccountPolicy::default(),
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            user_repo,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register a user, returning the raw response.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> reqwest::Response {
        self.post("/users")
            .json(&json!({
                "username": username,
                "password": password,
                "email": email,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register and log in, returning a valid bearer token.
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        let response = self
            .register(username, password, &format!("{username}@example.com"))
            .await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self
            .post("/login")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token in login response")
            .to_string()
    }

    /// Peek at a stored password hash (storage-level assertion helper).
    pub fn stored_password_hash(&self, username: &str) -> Option<String> {
        self.user_repo
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username.as_str() == username)
            .map(|u| u.password_hash.clone())
    }
}

/// In-memory user store with the same contract as the real adapter.
pub struct InMemoryUserRepository {
    pub users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == *username).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username == user.username && u.id != user.id)
        {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(UserError::NotFound(user.username.to_string())),
        }
    }

    async fn delete(&self, username: &Username) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.username != *username);
        if users.len() == before {
            return Err(UserError::NotFound(username.to_string()));
        }
        Ok(())
    }

    async fn add_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.username == *username) {
            Some(user) => {
                if !user.favorite_movie_ids.contains(movie_id) {
                    user.favorite_movie_ids.push(*movie_id);
                }
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.username == *username) {
            Some(user) => {
                user.favorite_movie_ids.retain(|id| id != movie_id);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }
}

/// In-memory movie catalog seeded with the same ten records as the store.
pub struct InMemoryMovieRepository {
    movies: Vec<Movie>,
}

impl InMemoryMovieRepository {
    pub fn seeded() -> Self {
        Self {
            movies: seed_movies(),
        }
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        Ok(self.movies.clone())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, MovieError> {
        Ok(self.movies.iter().find(|m| m.title == title).cloned())
    }

    async fn find_first_by_genre(&self, genre_name: &str) -> Result<Option<Movie>, MovieError> {
        Ok(self
            .movies
            .iter()
            .find(|m| m.genre.name == genre_name)
            .cloned())
    }

    async fn find_first_by_director(
        &self,
        director_name: &str,
    ) -> Result<Option<Movie>, MovieError> {
        Ok(self
            .movies
            .iter()
            .find(|m| m.director.name == director_name)
            .cloned())
    }
}

fn movie(
    title: &str,
    genre_name: &str,
    director_name: &str,
    birth_year: i32,
    death_year: Option<i32>,
    release_year: i32,
) -> Movie {
    Movie {
        id: MovieId::new(),
        title: title.to_string(),
        description: format!("{title} description"),
        genre: Genre {
            name: genre_name.to_string(),
            description: format!("{genre_name} genre description"),
        },
        director: Director {
            name: director_name.to_string(),
            bio: format!("{director_name} bio"),
            birth_year,
            death_year,
        },
        image_url: "https://example.com/poster.jpg".to_string(),
        release_year,
        featured: true,
    }
}

/// The ten catalog records, matching the production seed migration.
pub fn seed_movies() -> Vec<Movie> {
    vec![
        movie(
            "The Lord of the Rings: The Return of the King",
            "fantasy",
            "Peter Jackson",
            1961,
            None,
            2003,
        ),
        movie(
            "Inception",
            "science fiction",
            "Christopher Nolan",
            1970,
            None,
            2010,
        ),
        movie("Spirited Away", "anime", "Hayao Miyazaki", 1941, None, 2001),
        movie(
            "The Prestige",
            "thriller",
            "Christopher Nolan",
            1970,
            None,
            2006,
        ),
        movie(
            "Pirates of the Caribbean: The Curse of the Black Pearl",
            "action",
            "Gore Verbinski",
            1964,
            None,
            2003,
        ),
        movie("Coco", "musical", "Lee Unkrich", 1967, None, 2017),
        movie("Gone Girl", "thriller", "David Fincher", 1962, None, 2014),
        movie(
            "Gone with the Wind",
            "romance",
            "Victor Fleming",
            1889,
            Some(1949),
            1939,
        ),
        movie(
            "Star Wars",
            "science fiction",
            "George Lucas",
            1944,
            None,
            1977,
        ),
        movie(
            "Avatar: The Way of Water",
            "action",
            "James Cameron",
            1954,
            None,
            2022,
        ),
    ]
}

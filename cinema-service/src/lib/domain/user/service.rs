use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::movie::models::MovieId;
use crate::user::errors::UserError;
use crate::user::models::RegisterUserCommand;
use crate::user::models::ReplaceUserCommand;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::models::Username;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
/// Passwords are hashed here so no plaintext ever reaches a repository.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHashing(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            birthday: command.birthday,
            favorite_movie_ids: Vec::new(),
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn get_user(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFound(username.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn replace_user(
        &self,
        username: &Username,
        command: ReplaceUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFound(username.to_string()))?;

        user.username = command.username;
        user.email = command.email;
        user.birthday = command.birthday;
        user.password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHashing(e.to_string()))?;

        self.repository.update(user).await
    }

    async fn delete_user(&self, username: &Username) -> Result<(), UserError> {
        self.repository.delete(username).await
    }

    async fn add_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<User, UserError> {
        self.repository
            .add_favorite(username, movie_id)
            .await?
            .ok_or_else(|| UserError::NotFound(username.to_string()))
    }

    async fn remove_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<User, UserError> {
        self.repository
            .remove_favorite(username, movie_id)
            .await?
            .ok_or_else(|| UserError::NotFound(username.to_string()))
    }
}

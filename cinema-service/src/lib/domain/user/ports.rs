use async_trait::async_trait;

use crate::movie::models::MovieId;
use crate::user::errors::UserError;
use crate::user::models::RegisterUserCommand;
use crate::user::models::ReplaceUserCommand;
use crate::user::models::User;
use crate::user::models::Username;

/// Port for user domain service operations.
///
/// Accounts are keyed by their unique username at this level; the UUID
/// primary key is a storage concern.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command with username, email, password, birthday
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `PasswordHashing` - Hashing the password failed
    /// * `DatabaseError` - Store operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique username.
    ///
    /// # Errors
    /// * `NotFound` - No user with this username
    /// * `DatabaseError` - Store operation failed
    async fn get_user(&self, username: &Username) -> Result<User, UserError>;

    /// Retrieve all users.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Replace an existing user's account fields.
    ///
    /// # Arguments
    /// * `username` - Username identifying the account
    /// * `command` - Replacement username, email, password and birthday
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `UsernameAlreadyExists` - Replacement username is already taken
    /// * `PasswordHashing` - Hashing the password failed
    /// * `DatabaseError` - Store operation failed
    async fn replace_user(
        &self,
        username: &Username,
        command: ReplaceUserCommand,
    ) -> Result<User, UserError>;

    /// Delete an existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete_user(&self, username: &Username) -> Result<(), UserError>;

    /// Add a movie to a user's favorites set.
    ///
    /// Idempotent: adding an id already in the set leaves it unchanged.
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn add_favorite(&self, username: &Username, movie_id: &MovieId)
        -> Result<User, UserError>;

    /// Remove a movie from a user's favorites set.
    ///
    /// Removing an id not in the set is a no-op, not an error.
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn remove_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate.
///
/// The backing store provides atomic single-record read-modify-write; the
/// favorites operations rely on that for their set semantics.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve all users from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Update existing user in storage (matched by id).
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `DatabaseError` - Store operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete(&self, username: &Username) -> Result<(), UserError>;

    /// Atomically add a movie id to a user's favorites set.
    ///
    /// Must be idempotent: a second add of the same id changes nothing.
    ///
    /// # Returns
    /// The updated user, or None if no such user exists
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn add_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError>;

    /// Atomically remove a movie id from a user's favorites set.
    ///
    /// Removing an absent id leaves the set unchanged.
    ///
    /// # Returns
    /// The updated user, or None if no such user exists
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn remove_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError>;
}

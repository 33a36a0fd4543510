use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::movie::models::MovieId;
use crate::user::errors::UserError;
use crate::user::models::EmailAddress;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::models::Username;
use crate::user::ports::UserRepository;

const USER_COLUMNS: &str =
    "id, username, email, password_hash, birthday, favorite_movie_ids, created_at";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape for the `users` table.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    birthday: Option<NaiveDate>,
    favorite_movie_ids: Vec<Uuid>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId(row.id),
            username: Username::from_stored(row.username),
            email: EmailAddress::new(row.email)?,
            password_hash: row.password_hash,
            birthday: row.birthday,
            favorite_movie_ids: row.favorite_movie_ids.into_iter().map(MovieId).collect(),
            created_at: row.created_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> UserError {
    UserError::DatabaseError(e.to_string())
}

fn map_unique_violation(e: sqlx::Error, username: &Username) -> UserError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("users_username_key") {
            return UserError::UsernameAlreadyExists(username.as_str().to_string());
        }
    }
    database_error(e)
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, birthday, favorite_movie_ids, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.birthday)
        .bind(
            user.favorite_movie_ids
                .iter()
                .map(|id| id.0)
                .collect::<Vec<Uuid>>(),
        )
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &user.username))?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(User::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = $2, email = $3, password_hash = $4, birthday = $5
            WHERE id = $1
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.birthday)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &user.username))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(user.username.to_string()));
        }

        Ok(user)
    }

    async fn delete(&self, username: &Username) -> Result<(), UserError> {
        let result = sqlx::query("DELETE FROM users WHERE username = $1")
            .bind(username.as_str())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(username.to_string()));
        }

        Ok(())
    }

    async fn add_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError> {
        // Single-statement update keeps the read-modify-write atomic; the
        // guard makes a repeated add a no-op instead of a duplicate entry.
        let row: Option<UserRow> = sqlx::query_as(&format!(
            r#"
            UPDATE users
            SET favorite_movie_ids = CASE
                WHEN favorite_movie_ids @> ARRAY[$2]::uuid[] THEN favorite_movie_ids
                ELSE array_append(favorite_movie_ids, $2)
            END
            WHERE username = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(username.as_str())
        .bind(movie_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(User::try_from).transpose()
    }

    async fn remove_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError> {
        // array_remove of an absent id already leaves the array unchanged.
        let row: Option<UserRow> = sqlx::query_as(&format!(
            r#"
            UPDATE users
            SET favorite_movie_ids = array_remove(favorite_movie_ids, $2)
            WHERE username = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(username.as_str())
        .bind(movie_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(User::try_from).transpose()
    }
}

//! User repository.
//!
//! Emails are stored as plain text and re-parsed on read, so a row that was
//! corrupted outside the application surfaces as `DataCorruption` instead of
//! leaking an invalid [`Email`] into the domain.

use async_trait::async_trait;
use sqlx::PgPool;

use clementine_core::{Email, User, UserId};

use super::RepositoryError;

/// Storage operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the generated id.
    async fn create(&self, user: &User) -> Result<UserId, RepositoryError>;

    /// Fetch a user by id, or `None` if absent.
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Fetch all users ordered by id.
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
}

/// `PostgreSQL`-backed user repository.
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    name: Option<String>,
    email: String,
    phone: Option<String>,
}

impl UserRow {
    fn into_user(self) -> Result<User, RepositoryError> {
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(User {
            id: Some(UserId::new(self.id)),
            name: self.name,
            email,
            phone: self.phone,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> Result<UserId, RepositoryError> {
        let id = sqlx::query_scalar::<_, UserId>(
            "INSERT INTO users (name, email, phone) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(user.name.as_deref())
        .bind(user.email.as_str())
        .bind(user.phone.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(id)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row =
            sqlx::query_as::<_, UserRow>("SELECT id, name, email, phone FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        let rows =
            sqlx::query_as::<_, UserRow>("SELECT id, name, email, phone FROM users ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }
}

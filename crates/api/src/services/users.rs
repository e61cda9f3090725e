//! User service.

use serde::Deserialize;
use tracing::instrument;

use clementine_core::{User, UserId};

use crate::db::UserRepository;
use crate::error::AppError;

/// Request body for creating a user.
///
/// All fields are optional at the serde layer; the domain entity decides
/// which are actually required, so a missing email reports a validation
/// message instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// User management service.
pub struct UserService<'a> {
    users: &'a dyn UserRepository,
}

impl<'a> UserService<'a> {
    /// Create a new user service.
    #[must_use]
    pub const fn new(users: &'a dyn UserRepository) -> Self {
        Self { users }
    }

    /// Validate and store a new user, returning its id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the email is missing or malformed.
    /// Returns `AppError::Database` with a conflict if the email is taken.
    #[instrument(skip(self, req))]
    pub async fn create_user(&self, req: CreateUserRequest) -> Result<UserId, AppError> {
        let user = User::new(req.name, req.email.as_deref().unwrap_or(""), req.phone)?;
        let id = self.users.create(&user).await?;

        tracing::info!(user_id = id.as_i32(), "User created");
        Ok(id)
    }

    /// Fetch a user by id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no user has the id.
    pub async fn get_user(&self, id: UserId) -> Result<User, AppError> {
        self.users
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// List all users, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the query fails.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.get_all().await?)
    }
}

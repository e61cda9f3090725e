//! User entity.

use serde::Serialize;

use crate::entities::ValidationError;
use crate::types::{Email, UserId};

/// A registered user.
///
/// `id` is assigned by the repository on insert; a freshly constructed user
/// carries `None` until persisted. The email is validated on construction and
/// on every [`update_email`], so a held `User` always has a well-formed
/// address.
///
/// Serializes to `{id, name, email, phone}`.
///
/// [`update_email`]: User::update_email
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: Option<UserId>,
    pub name: Option<String>,
    pub email: Email,
    pub phone: Option<String>,
}

impl User {
    /// Create a user from signup input.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `email` is empty or not shaped like
    /// `local@domain.tld`.
    pub fn new(
        name: Option<String>,
        email: &str,
        phone: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            name,
            email: Email::parse(email)?,
            phone,
        })
    }

    /// Replace the email address.
    ///
    /// The candidate is parsed before anything is assigned, so a failed
    /// update leaves the stored email unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `new_email` is empty or malformed.
    pub fn update_email(&mut self, new_email: &str) -> Result<(), ValidationError> {
        self.email = Email::parse(new_email)?;
        Ok(())
    }
}

//! Database operations for the Clementine `PostgreSQL` database.
//!
//! # Tables
//!
//! - `users` - Registered users (unique email)
//! - `orders` - Order headers (owner, total, status)
//! - `order_items` - Line items belonging to an order
//!
//! Each table has a repository trait so handlers and services never touch
//! `sqlx` directly. The `Pg*` implementations here run against `PostgreSQL`;
//! [`memory::MemoryStore`] implements the same traits without a database.
//!
//! # Schema
//!
//! The schema lives in `crates/api/schema.sql` and is applied via:
//! ```bash
//! psql "$CLEMENTINE_DATABASE_URL" -f crates/api/schema.sql
//! ```

pub mod memory;
pub mod order_items;
pub mod orders;
pub mod users;

pub use memory::MemoryStore;
pub use order_items::{OrderItemRepository, PgOrderItemRepository};
pub use orders::{OrderDetails, OrderRecord, OrderRepository, PgOrderRepository};
pub use users::{PgUserRepository, UserRepository};

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

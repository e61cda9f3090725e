//! Database connectivity check.
//!
//! # Usage
//!
//! ```bash
//! clem-cli db check
//! ```
//!
//! # Environment Variables
//!
//! - `CLEMENTINE_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)

use tracing::info;

use clementine_api::db;

/// Verify database connectivity and report table counts.
///
/// A missing table fails the check, which catches a database that exists but
/// never had `crates/api/schema.sql` applied.
///
/// # Errors
///
/// Returns an error if the environment variable is missing, the database is
/// unreachable, or a table is absent.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let database_url = super::database_url()?;

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    sqlx::query("SELECT 1").fetch_one(&pool).await?;

    for table in ["users", "orders", "order_items"] {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&pool).await?;
        info!("  {table}: {count} rows");
    }

    info!("Database check passed");
    Ok(())
}

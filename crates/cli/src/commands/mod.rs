//! CLI command implementations.

use secrecy::SecretString;

pub mod db_check;
pub mod seed;

/// Read the database URL from the environment.
///
/// Tries `CLEMENTINE_DATABASE_URL` first, then the generic `DATABASE_URL`
/// (set by Fly.io postgres attach).
pub(crate) fn database_url() -> Result<SecretString, Box<dyn std::error::Error>> {
    std::env::var("CLEMENTINE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "CLEMENTINE_DATABASE_URL not set".into())
}

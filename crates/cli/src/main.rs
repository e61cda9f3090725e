//! Clementine CLI - Database checks and seeding tools.
//!
//! # Usage
//!
//! ```bash
//! # Verify database connectivity and schema
//! clem-cli db check
//!
//! # Seed the database with demo users and orders
//! clem-cli seed
//! ```
//!
//! # Commands
//!
//! - `db check` - Verify connectivity and report table counts
//! - `seed` - Insert demo users and orders

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "clem-cli")]
#[command(author, version, about = "Clementine CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database utilities
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
    /// Seed the database with demo data
    Seed,
}

#[derive(Subcommand)]
enum DbAction {
    /// Verify connectivity and report table counts
    Check,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Db { action } => match action {
            DbAction::Check => commands::db_check::run().await?,
        },
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}

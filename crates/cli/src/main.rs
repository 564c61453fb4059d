//! DeMart CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! demart-cli migrate
//!
//! # Seed the catalog with sample data
//! demart-cli seed
//!
//! # Bootstrap an admin account (idempotent)
//! demart-cli create-admin --email admin@demart.test --password <password>
//! ```
//!
//! # Environment Variables
//!
//! - `DEMART_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "demart-cli")]
#[command(author, version, about = "DeMart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the catalog with sample categories and products
    Seed,
    /// Create (or re-key) an admin account
    CreateAdmin {
        /// Admin email address
        #[arg(long)]
        email: String,
        /// Admin password
        #[arg(long)]
        password: String,
    },
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
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::CreateAdmin { email, password } => {
            commands::create_admin::run(&email, &password).await?;
        }
    }
    Ok(())
}

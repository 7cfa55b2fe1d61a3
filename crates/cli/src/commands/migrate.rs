//! Database migration command.
//!
//! Runs the application migrations from `crates/server/migrations/`,
//! then lets the session store create its own schema.
//!
//! # Usage
//!
//! ```bash
//! rekhali-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `REKHALI_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string

use tower_sessions_sqlx_store::PostgresStore;

use super::CliError;

/// Run all database migrations.
pub async fn run() -> Result<(), CliError> {
    let pool = super::connect().await?;

    tracing::info!("Running application migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Running session store migration...");
    PostgresStore::new(pool).migrate().await?;

    tracing::info!("Migrations complete!");
    Ok(())
}

//! CLI command implementations.

pub mod admin;
pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::PgPool;
use thiserror::Error;

/// Errors shared across CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Invalid email address.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Password fails the minimum requirements.
    #[error("Weak password: {0}")]
    WeakPassword(String),

    /// Password hashing failed.
    #[error("Password hashing failed")]
    PasswordHash,

    /// Admin user already exists.
    #[error("Admin user already exists with email: {0}")]
    UserExists(String),

    /// Seed data is malformed.
    #[error("Invalid seed data: {0}")]
    SeedData(String),
}

/// Connect to the database named by `REKHALI_DATABASE_URL` (or `DATABASE_URL`).
pub(crate) async fn connect() -> Result<PgPool, CliError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("REKHALI_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| CliError::MissingEnvVar("REKHALI_DATABASE_URL"))?;

    use secrecy::ExposeSecret;
    tracing::info!("Connecting to database...");
    Ok(PgPool::connect(database_url.expose_secret()).await?)
}

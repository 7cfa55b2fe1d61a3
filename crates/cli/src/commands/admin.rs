//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! rekhali-cli admin create -e admin@rekhali.com -p "a strong password"
//! ```
//!
//! # Environment Variables
//!
//! - `REKHALI_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHasher};
use uuid::Uuid;

use rekhali_core::Email;

use super::CliError;

const MIN_PASSWORD_LENGTH: usize = 8;

/// Create a new admin user.
///
/// # Returns
///
/// The ID of the created admin user.
pub async fn create_user(email: &str, password: &str) -> Result<Uuid, CliError> {
    let email = Email::parse(email).map_err(|e| CliError::InvalidEmail(e.to_string()))?;

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(CliError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| CliError::PasswordHash)?
        .to_string();

    let pool = super::connect().await?;

    tracing::info!("Creating admin user: {}", email);

    let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM admin_users WHERE email = $1")
        .bind(email.as_str())
        .fetch_optional(&pool)
        .await?;

    if existing.is_some() {
        return Err(CliError::UserExists(email.to_string()));
    }

    let user_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO admin_users (email, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(email.as_str())
    .bind(&password_hash)
    .fetch_one(&pool)
    .await?;

    tracing::info!(
        "Admin user created successfully! ID: {}, Email: {}",
        user_id,
        email
    );

    Ok(user_id)
}

//! First-run data seeding.
//!
//! Idempotent: every check is "insert only when missing", so calling
//! this on each startup is safe.

use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::db::settings::{DEFAULT_WHATSAPP_NUMBER, WHATSAPP_NUMBER_KEY};
use crate::db::{AdminUserRepository, SettingsRepository};
use crate::services::{AdminAuthService, AuthError};

/// Errors from startup seeding.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Repository(#[from] crate::db::RepositoryError),

    #[error("failed to seed admin user: {0}")]
    Auth(#[from] AuthError),
}

/// Ensure the rows the application depends on exist.
///
/// Seeds the first admin user from configuration when the table is
/// empty, and the default WhatsApp number when no value is stored.
pub async fn ensure_seed_data(pool: &PgPool, config: &ServerConfig) -> Result<(), InitError> {
    seed_admin_user(pool, config).await?;
    seed_whatsapp_number(pool).await?;
    Ok(())
}

async fn seed_admin_user(pool: &PgPool, config: &ServerConfig) -> Result<(), InitError> {
    let admin_users = AdminUserRepository::new(pool);
    if admin_users.count().await? > 0 {
        return Ok(());
    }

    let Some(seed) = &config.seed_admin else {
        tracing::warn!(
            "no admin users exist and REKHALI_ADMIN_EMAIL/REKHALI_ADMIN_PASSWORD are not set; \
             admin panel will be unusable until an admin is created"
        );
        return Ok(());
    };

    let admin = AdminAuthService::new(pool)
        .create_admin(&seed.email, seed.password.expose_secret())
        .await?;
    tracing::info!(email = %admin.email, "seeded initial admin user");
    Ok(())
}

async fn seed_whatsapp_number(pool: &PgPool) -> Result<(), InitError> {
    let settings = SettingsRepository::new(pool);
    if settings.get(WHATSAPP_NUMBER_KEY).await?.is_none() {
        settings
            .upsert(WHATSAPP_NUMBER_KEY, DEFAULT_WHATSAPP_NUMBER)
            .await?;
        tracing::info!("seeded default WhatsApp number");
    }
    Ok(())
}

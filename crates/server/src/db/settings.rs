//! Settings repository: key/value rows upserted by the admin panel.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::setting::Setting;

/// The only settings key in use today.
pub const WHATSAPP_NUMBER_KEY: &str = "whatsapp_number";

/// Fallback contact number rendered when the setting row is missing.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "+919876543210";

/// Repository for settings database operations.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a setting by key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, key: &str) -> Result<Option<Setting>, RepositoryError> {
        let setting = sqlx::query_as::<_, Setting>(
            "SELECT id, key, value, created_at, updated_at FROM settings WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(self.pool)
        .await?;
        Ok(setting)
    }

    /// Get the configured WhatsApp number, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn whatsapp_number(&self) -> Result<String, RepositoryError> {
        let setting = self.get(WHATSAPP_NUMBER_KEY).await?;
        Ok(setting.map_or_else(|| DEFAULT_WHATSAPP_NUMBER.to_owned(), |s| s.value))
    }

    /// Insert or update a setting by key, stamping `updated_at` on overwrite.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn upsert(&self, key: &str, value: &str) -> Result<Setting, RepositoryError> {
        let setting = sqlx::query_as::<_, Setting>(
            "INSERT INTO settings (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = now() \
             RETURNING id, key, value, created_at, updated_at",
        )
        .bind(key)
        .bind(value)
        .fetch_one(self.pool)
        .await?;
        Ok(setting)
    }
}

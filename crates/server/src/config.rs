//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `REKHALI_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)
//!
//! ## Optional
//! - `REKHALI_HOST` - Bind address (default: 127.0.0.1)
//! - `REKHALI_PORT` - Listen port (default: 3000)
//! - `REKHALI_BASE_URL` - Public URL (default: `http://localhost:3000`)
//! - `REKHALI_ADMIN_EMAIL` - Seed admin email (used only when the admin
//!   table is empty)
//! - `REKHALI_ADMIN_PASSWORD` - Seed admin password (required alongside the
//!   email; rejected if it looks like a placeholder)
//! - `REKHALI_UPLOADS_DIR` - Directory for uploaded product images
//!   (default: `uploads`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Minimum length for the seed admin password.
const MIN_ADMIN_PASSWORD_LENGTH: usize = 8;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Seed admin credentials, applied once when the admin table is empty
    pub seed_admin: Option<SeedAdminConfig>,
    /// Directory where uploaded product images are stored
    pub uploads_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. "production")
    pub sentry_environment: Option<String>,
}

/// Seed admin account configuration.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct SeedAdminConfig {
    /// Admin email address
    pub email: String,
    /// Admin password (hashed before it reaches the database)
    pub password: SecretString,
}

impl std::fmt::Debug for SeedAdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedAdminConfig")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the seed admin password fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("REKHALI_DATABASE_URL")?;
        let host = get_env_or_default("REKHALI_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("REKHALI_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("REKHALI_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("REKHALI_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("REKHALI_BASE_URL", "http://localhost:3000");

        let seed_admin = SeedAdminConfig::from_env()?;
        let uploads_dir = PathBuf::from(get_env_or_default("REKHALI_UPLOADS_DIR", "uploads"));
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            seed_admin,
            uploads_dir,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the public base URL is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl SeedAdminConfig {
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(email) = get_optional_env("REKHALI_ADMIN_EMAIL") else {
            return Ok(None);
        };

        let password = std::env::var("REKHALI_ADMIN_PASSWORD")
            .map_err(|_| ConfigError::MissingEnvVar("REKHALI_ADMIN_PASSWORD".to_string()))?;
        validate_admin_password(&password, "REKHALI_ADMIN_PASSWORD")?;

        Ok(Some(Self {
            email,
            password: SecretString::from(password),
        }))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that the seed admin password is usable.
///
/// Rejects passwords shorter than eight characters and values that look
/// like placeholders left over from a template `.env` file.
fn validate_admin_password(password: &str, var_name: &str) -> Result<(), ConfigError> {
    if password.len() < MIN_ADMIN_PASSWORD_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_ADMIN_PASSWORD_LENGTH,
                password.len()
            ),
        ));
    }

    let lower = password.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_admin_password_too_short() {
        let result = validate_admin_password("short", "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_admin_password_placeholder() {
        assert!(validate_admin_password("changeme123", "TEST_VAR").is_err());
        assert!(validate_admin_password("your-password-here", "TEST_VAR").is_err());
    }

    #[test]
    fn test_validate_admin_password_valid() {
        assert!(validate_admin_password("Rekhali@2024", "TEST_VAR").is_ok());
    }

    #[test]
    fn test_seed_admin_debug_redacts_password() {
        let config = SeedAdminConfig {
            email: "admin@rekhali.com".to_string(),
            password: SecretString::from("super_secret_password"),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("admin@rekhali.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_password"));
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            database_url: SecretString::from("postgres://localhost/rekhali"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            seed_admin: None,
            uploads_dir: PathBuf::from("uploads"),
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
        assert!(!config.is_secure());
    }
}

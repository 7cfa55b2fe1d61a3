//! Admin user domain types.

use chrono::{DateTime, Utc};

use rekhali_core::{AdminUserId, Email};

/// An admin user (domain type).
///
/// The password hash never leaves the db/services layers; this struct is not
/// serializable on purpose.
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// Unique admin user ID.
    pub id: AdminUserId,
    /// Admin's email address.
    pub email: Email,
    /// Argon2 password hash.
    pub password_hash: String,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
}

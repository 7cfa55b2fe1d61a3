//! Session-related types.
//!
//! Types stored in the session for admin authentication state.

use serde::{Deserialize, Serialize};

use rekhali_core::{AdminUserId, Email};

/// Session-stored admin identity.
///
/// Minimal data stored in the session to identify the logged-in admin.
/// The session guard re-verifies the id against the database on every
/// guarded request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's database ID.
    pub id: AdminUserId,
    /// Admin's email address.
    pub email: Email,
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
